//! Enclosure walkthrough on a handful of rectangles.
//!
//! Run: `cargo run -p rectgeom --example enclosure`

use rectgeom::prelude::*;

fn main() {
    let a = Rect::from_points(&[
        vector![1.0, 2.0],
        vector![1.0, 7.0],
        vector![5.0, 2.0],
        vector![5.0, 7.0],
    ]);
    let b = Rect::from_points(&[
        vector![2.0, 4.0],
        vector![2.0, 6.0],
        vector![3.0, 4.0],
        vector![3.0, 6.0],
    ]);
    println!("A = {:?} x {:?}", (a.x.lo, a.x.hi), (a.y.lo, a.y.hi));
    println!("B = {:?} x {:?}", (b.x.lo, b.x.hi), (b.y.lo, b.y.hi));
    println!("B enclosed by A: {}", is_enclosed_by(&b, &a));
    println!("A enclosed by B: {}", is_enclosed_by(&a, &b));

    let gap = a.intersection(&Rect::from_center_size(vector![10.0, 0.0], vector![1.0, 1.0]));
    println!("A ∩ far square empty: {} (valid: {})", gap.is_empty(), gap.is_valid());

    let shrunk = a.expanded(vector![-3.0, 0.0]);
    println!("A shrunk by 3 in x: empty = {}", shrunk.is_empty());

    let mut tok = ReplayToken::new(7, 0);
    let enclosed = (0..100)
        .filter(|_| {
            let r = draw_rect(RectCfg::default(), tok).expect("default cfg is finite");
            tok = tok.next();
            is_enclosed_by(&r, &a)
        })
        .count();
    println!("random rects enclosed by A: {enclosed}/100");
}
