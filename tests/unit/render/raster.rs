//! Tests for pixel coverage, blending and outline distances

#[cfg(test)]
mod tests {
    use image::{Rgba, imageops};
    use kolam::render::raster::{
        blend_over, polygon_distance, rounded_rect_distance, segment_distance,
    };
    use kolam::render::{RasterSurface, Stroke, Surface};
    use kolam::spatial::{CornerRadii, Point, Rect};

    const INK: Rgba<u8> = Rgba([200, 40, 0, 255]);

    // Tests opaque sources replace and transparent sources are ignored
    // Verified by averaging opaque sources with the destination
    #[test]
    fn test_blend_over() {
        let mut pixel = Rgba([0, 0, 255, 255]);
        blend_over(&mut pixel, Rgba([9, 9, 9, 0]));
        assert_eq!(pixel, Rgba([0, 0, 255, 255]));

        blend_over(&mut pixel, Rgba([255, 0, 0, 128]));
        assert_eq!(pixel, Rgba([128, 0, 127, 255]));

        blend_over(&mut pixel, INK);
        assert_eq!(pixel, INK);
    }

    // Tests a disc covers exactly the pixel centres inside it
    // Verified by testing coverage at pixel corners
    #[test]
    fn test_fill_circle_coverage() {
        let mut surface = RasterSurface::new(10, 10);
        surface.fill_circle(Point::new(5.0, 5.0), 2.0, INK);
        let painted = surface.image().pixels().filter(|p| **p == INK).count();
        assert_eq!(painted, 12);

        surface.fill_circle(Point::new(5.0, 5.0), 0.0, Rgba([1, 1, 1, 255]));
        assert!(surface.image().pixels().all(|p| *p != Rgba([1, 1, 1, 255])));
    }

    // Tests mirrored geometry rasterises to mirrored pixels
    // Verified by sampling pixel corners instead of centres
    #[test]
    fn test_symmetric_outline() {
        let mut surface = RasterSurface::with_background(11, 11, Rgba([255, 255, 255, 255]));
        let rect = Rect::centered_square(surface.center(), 7.0);
        surface.stroke_rounded_rect(rect, CornerRadii::uniform(2.0), Stroke::new(INK, 1.0));
        let image = surface.into_image();

        assert_eq!(imageops::flip_horizontal(&image), image);
        assert_eq!(imageops::flip_vertical(&image), image);
        assert_eq!(*image.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
        assert_eq!(*image.get_pixel(5, 2), INK);
    }

    // Tests drawing off the surface is clipped instead of panicking
    // Verified by removing the bounds clamp
    #[test]
    fn test_clipping() {
        let mut surface = RasterSurface::new(4, 4);
        surface.fill_circle(Point::new(-10.0, -10.0), 3.0, INK);
        surface.stroke_polygon(
            &[Point::new(-5.0, 2.0), Point::new(50.0, 2.0)],
            Stroke::new(INK, 1.0),
        );
        surface.stroke_polygon(&[], Stroke::new(INK, 1.0));
        let painted = surface.image().pixels().filter(|p| **p == INK).count();
        assert_eq!(painted, 8);
    }

    // Tests outline distances for plain and fully rounded squares
    // Verified by measuring to the filled area instead of the outline
    #[test]
    fn test_rounded_rect_distance() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let square = CornerRadii::default();
        assert_eq!(rounded_rect_distance(Point::new(5.0, 5.0), &rect, &square), 5.0);
        assert_eq!(rounded_rect_distance(Point::new(5.0, 0.0), &rect, &square), 0.0);
        assert_eq!(rounded_rect_distance(Point::new(5.0, -3.0), &rect, &square), 3.0);

        let circle = CornerRadii::uniform(5.0);
        assert!((rounded_rect_distance(Point::new(5.0, 5.0), &rect, &circle) - 5.0).abs() < 1e-12);
        let corner = rounded_rect_distance(Point::new(0.0, 0.0), &rect, &circle);
        assert!((corner - (50f64.sqrt() - 5.0)).abs() < 1e-12);
    }

    // Tests segment and polygon distances
    // Verified by measuring to the infinite line
    #[test]
    fn test_segment_and_polygon_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        assert_eq!(segment_distance(Point::new(2.0, 3.0), a, b), 3.0);
        assert_eq!(segment_distance(Point::new(7.0, 4.0), a, b), 5.0);
        assert_eq!(segment_distance(Point::new(0.0, 2.0), a, a), 2.0);

        let square = [a, b, Point::new(4.0, 4.0), Point::new(0.0, 4.0)];
        assert_eq!(polygon_distance(Point::new(2.0, 1.0), &square), 1.0);
        assert_eq!(polygon_distance(Point::new(-1.0, 2.0), &square), 1.0);
        assert!(polygon_distance(a, &[]).is_infinite());
    }
}
