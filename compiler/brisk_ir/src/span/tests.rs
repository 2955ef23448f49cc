use super::*;

#[test]
fn point_span_starts_and_ends_at_offset() {
    let span = Span::point(7);
    assert_eq!((span.start, span.end), (7, 7));
    assert_eq!(span.to_range(), 7..7);
}

#[test]
fn span_to_range_slices_source() {
    let source = "let x = 1";
    assert_eq!(&source[Span::new(4, 5).to_range()], "x");
}

#[test]
fn dummy_is_empty_at_zero() {
    assert_eq!(Span::DUMMY, Span::new(0, 0));
    assert_eq!(Span::default(), Span::DUMMY);
}

#[test]
fn span_display() {
    assert_eq!(Span::new(3, 5).to_string(), "3..5");
    assert_eq!(format!("{:?}", Span::new(3, 5)), "3..5");
}
