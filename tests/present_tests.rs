use handmade_blit::pattern::render_weird_gradient;
use handmade_blit::{MemorySurface, PixelBuffer, PresentationTarget, present};

// ============================================================================
// Stretch blit against the window surface format
// ============================================================================

#[test]
fn test_surface_cells_are_xrgb() {
    let mut buffer = PixelBuffer::with_size(256, 2).unwrap();
    render_weird_gradient(&mut buffer, 0, 0);

    let mut surface = MemorySurface::new(256, 2);
    present(&buffer, &mut surface).unwrap();

    // Top surface row is buffer row 1 (green = 1), blue runs with x, red 0.
    for x in 0..256 {
        assert_eq!(surface.pixel(x, 0), Some(0x0000_0100 | x as u32));
        assert_eq!(surface.pixel(x, 1), Some(x as u32));
    }
}

#[test]
fn test_non_integer_stretch_covers_whole_target() {
    let mut buffer = PixelBuffer::with_size(7, 5).unwrap();
    render_weird_gradient(&mut buffer, 100, 200);

    let mut surface = MemorySurface::new(23, 11);
    present(&buffer, &mut surface).unwrap();

    // Every target cell is some source pixel; corners map to corners.
    let sources: Vec<u32> = (0..5)
        .flat_map(|y| (0..7).map(move |x| (x, y)))
        .map(|(x, y)| buffer.pixel_at(x, y).to_u32())
        .collect();
    assert!(surface.pixels().iter().all(|c| sources.contains(c)));
    assert_eq!(surface.pixel(0, 0), Some(buffer.pixel_at(0, 4).to_u32()));
    assert_eq!(surface.pixel(22, 10), Some(buffer.pixel_at(6, 0).to_u32()));
}

#[test]
fn test_present_is_repeatable() {
    let mut buffer = PixelBuffer::with_size(40, 30).unwrap();
    render_weird_gradient(&mut buffer, 1, 2);

    let mut surface = MemorySurface::new(80, 45);
    present(&buffer, &mut surface).unwrap();
    let first = surface.pixels().to_vec();
    present(&buffer, &mut surface).unwrap();

    assert_eq!(surface.pixels(), &first[..]);
    assert_eq!(surface.flushes(), 2);
    assert_eq!(surface.size(), (80, 45));
}
