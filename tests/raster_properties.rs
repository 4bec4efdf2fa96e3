//! Property-based invariants of the picture model and the rasterizers.
//!
//! Verifies:
//! 1. `Picture::empty` fills every cell with the requested color
//! 2. `draw` never alters the picture it was called on
//! 3. lines include both endpoints and emit each long-axis value once
//! 4. rectangles cover exactly their bounding box
//! 5. circles never write outside the picture

use std::collections::HashSet;

use pixel_paint::geometry::{circle, line, rectangle};
use pixel_paint::{Color, Picture, PixelWrite, Point};
use proptest::prelude::*;

const BG: Color = Color::rgb(0xf0, 0xf0, 0xf0);
const INK: Color = Color::BLACK;

fn arb_color() -> impl Strategy<Value = Color> {
    any::<[u8; 3]>().prop_map(Color::from)
}

fn arb_point(max: i32) -> impl Strategy<Value = Point> {
    (0..max, 0..max).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn empty_picture_is_uniform(w in 1usize..40, h in 1usize..40, color in arb_color()) {
        let picture = Picture::empty(w, h, color).unwrap();
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                prop_assert_eq!(picture.pixel(x, y).unwrap(), color);
            }
        }
    }

    #[test]
    fn draw_is_immutable(
        writes in prop::collection::vec((0i32..10, 0i32..10, arb_color()), 0..30)
    ) {
        let picture = Picture::empty(10, 10, BG).unwrap();
        let before = picture.clone();
        let writes: Vec<PixelWrite> = writes
            .into_iter()
            .map(|(x, y, c)| PixelWrite::new(x, y, c))
            .collect();
        let drawn = picture.draw(&writes).unwrap();
        prop_assert_eq!(&picture, &before);
        if let Some(last) = writes.last() {
            prop_assert_eq!(drawn.pixel(last.x, last.y).unwrap(), last.color);
        }
    }

    #[test]
    fn line_spans_both_endpoints(start in arb_point(50), end in arb_point(50)) {
        let writes = line(start, end, INK);
        let cells: Vec<Point> = writes.iter().map(PixelWrite::point).collect();
        prop_assert_eq!(cells.first().copied(), Some(start));
        prop_assert_eq!(cells.last().copied(), Some(end));

        let long = (end.x - start.x).abs().max((end.y - start.y).abs()) as usize + 1;
        prop_assert_eq!(cells.len(), long);
        let unique: HashSet<Point> = cells.iter().copied().collect();
        prop_assert_eq!(unique.len(), long);

        // consecutive cells always touch, so the segment has no gaps
        for pair in cells.windows(2) {
            prop_assert!((pair[1].x - pair[0].x).abs() <= 1);
            prop_assert!((pair[1].y - pair[0].y).abs() <= 1);
        }
    }

    #[test]
    fn rectangle_covers_box(start in arb_point(20), end in arb_point(20)) {
        let writes = rectangle(start, end, INK);
        let w = (end.x - start.x).abs() + 1;
        let h = (end.y - start.y).abs() + 1;
        prop_assert_eq!(writes.len(), (w * h) as usize);
        prop_assert_eq!(&writes, &rectangle(start, end, INK));
        prop_assert!(writes.iter().all(|p| {
            p.x >= start.x.min(end.x) && p.x <= start.x.max(end.x)
                && p.y >= start.y.min(end.y) && p.y <= start.y.max(end.y)
        }), "rectangle wrote a pixel outside its bounding box");
    }

    #[test]
    fn circle_stays_in_picture(start in arb_point(12), end in arb_point(12)) {
        let picture = Picture::empty(12, 12, BG).unwrap();
        let writes = circle(&picture, start, end, INK);
        prop_assert!(picture.draw(&writes).is_ok());
    }
}
