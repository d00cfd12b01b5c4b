use super::*;
use glam::{Vec2, Vec3, Vec4};

// ============================================================================
// FieldType size tests
// ============================================================================

#[test]
fn test_component_count() {
    assert_eq!(FieldType::Float.component_count(), 1);
    assert_eq!(FieldType::Vec2.component_count(), 2);
    assert_eq!(FieldType::Vec3.component_count(), 3);
    assert_eq!(FieldType::Vec4.component_count(), 4);
}

#[test]
fn test_size_bytes_tightly_packed() {
    // No std140-style padding: vec3 really is 12 bytes
    assert_eq!(FieldType::Float.size_bytes(), 4);
    assert_eq!(FieldType::Vec2.size_bytes(), 8);
    assert_eq!(FieldType::Vec3.size_bytes(), 12);
    assert_eq!(FieldType::Vec4.size_bytes(), 16);
}

// ============================================================================
// Default value tests
// ============================================================================

#[test]
fn test_default_values_are_zero() {
    assert_eq!(FieldType::Float.default_value(), FieldValue::Float(0.0));
    assert_eq!(FieldType::Vec2.default_value(), FieldValue::Vec2(Vec2::ZERO));
    assert_eq!(FieldType::Vec3.default_value(), FieldValue::Vec3(Vec3::ZERO));
    assert_eq!(FieldType::Vec4.default_value(), FieldValue::Vec4(Vec4::ZERO));
}

#[test]
fn test_default_value_matches_type() {
    for ft in [
        FieldType::Float,
        FieldType::Vec2,
        FieldType::Vec3,
        FieldType::Vec4,
    ] {
        assert_eq!(ft.default_value().field_type(), ft);
    }
}

// ============================================================================
// Encode / decode tests
// ============================================================================

#[test]
fn test_encode_component_order() {
    // Components land in declared x, y, z, w order
    let mut out = [0.0f32; 3];
    FieldType::Vec3.encode(&FieldValue::Vec3(Vec3::new(1.0, 2.0, 3.0)), &mut out);
    assert_eq!(out, [1.0, 2.0, 3.0]);

    let mut out = [0.0f32; 4];
    FieldType::Vec4.encode(
        &FieldValue::Vec4(Vec4::new(0.5, -1.0, 7.0, 9.0)),
        &mut out,
    );
    assert_eq!(out, [0.5, -1.0, 7.0, 9.0]);
}

#[test]
fn test_encode_decode_round_trip() {
    let values = [
        FieldValue::Float(3.25),
        FieldValue::Vec2(Vec2::new(1.0, -2.0)),
        FieldValue::Vec3(Vec3::new(0.1, 0.2, 0.3)),
        FieldValue::Vec4(Vec4::new(-4.0, 5.0, -6.0, 7.0)),
    ];
    for value in values {
        let ft = value.field_type();
        let mut storage = vec![0.0f32; ft.component_count()];
        ft.encode(&value, &mut storage);
        assert_eq!(ft.decode(&storage), value);
    }
}

#[test]
fn test_decode_float() {
    assert_eq!(FieldType::Float.decode(&[42.5]), FieldValue::Float(42.5));
}

// ============================================================================
// FieldSpec tests
// ============================================================================

#[test]
fn test_field_spec_accessors() {
    let spec = FieldSpec::new("pos", FieldType::Vec2);
    assert_eq!(spec.name(), "pos");
    assert_eq!(spec.field_type(), FieldType::Vec2);
}

#[test]
fn test_check_value_accepts_matching_type() {
    let spec = FieldSpec::new("uv", FieldType::Vec2);
    assert!(spec.check_value(&FieldValue::Vec2(Vec2::ONE)).is_ok());
}

#[test]
fn test_check_value_rejects_wrong_type() {
    let spec = FieldSpec::new("uv", FieldType::Vec2);
    let err = spec.check_value(&FieldValue::Float(1.0)).unwrap_err();
    assert_eq!(
        err,
        crate::error::Error::TypeMismatch {
            field: "uv".to_string(),
            expected: FieldType::Vec2,
            found: FieldType::Float,
        }
    );
}

// ============================================================================
// Conversion tests
// ============================================================================

#[test]
fn test_from_conversions() {
    assert_eq!(FieldValue::from(2.0f32), FieldValue::Float(2.0));
    assert_eq!(FieldValue::from(Vec2::ONE), FieldValue::Vec2(Vec2::ONE));
    assert_eq!(FieldValue::from(Vec3::ONE), FieldValue::Vec3(Vec3::ONE));
    assert_eq!(FieldValue::from(Vec4::ONE), FieldValue::Vec4(Vec4::ONE));
}

#[test]
fn test_field_type_display() {
    assert_eq!(format!("{}", FieldType::Float), "Float");
    assert_eq!(format!("{}", FieldType::Vec2), "Vec2");
    assert_eq!(format!("{}", FieldType::Vec3), "Vec3");
    assert_eq!(format!("{}", FieldType::Vec4), "Vec4");
}
