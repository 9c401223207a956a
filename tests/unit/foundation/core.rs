use super::*;

#[test]
fn default_transform_is_identity() {
    assert_eq!(GlyphTransform::default().to_affine(), kurbo::Affine::IDENTITY);
}

#[test]
fn translation_only_maps_to_affine_translate() {
    let t = GlyphTransform {
        translate: Vec2::new(10.0, -2.5),
        ..GlyphTransform::default()
    };
    assert_eq!(
        t.to_affine(),
        kurbo::Affine::translate(Vec2::new(10.0, -2.5))
    );
}

#[test]
fn trs_composition_order_is_translate_rotate_scale() {
    let t = GlyphTransform::from_trs(Vec2::new(3.0, 4.0), 0.5, 2.0);
    let expected = kurbo::Affine::translate(Vec2::new(3.0, 4.0))
        * kurbo::Affine::rotate(0.5)
        * kurbo::Affine::scale(2.0);
    assert_eq!(t.to_affine(), expected);
}

#[test]
fn scale_applies_before_translation() {
    let t = GlyphTransform::from_trs(Vec2::new(100.0, 0.0), 0.0, 2.0);
    let p = t.to_affine() * kurbo::Point::new(1.0, 1.0);
    assert_eq!(p, kurbo::Point::new(102.0, 2.0));
}
