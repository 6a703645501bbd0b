//! 16-cell through the camera hyperplane
//!
//! Translates a 16-cell along the w axis so its vertices sweep across the
//! 4D camera's projection singularity, printing per-frame statistics. Edges
//! blink out while an endpoint sits on the singular hyperplane and come
//! back as it passes through - degeneracy is per-frame, never permanent.
//!
//! Run with: `cargo run --example sixteen_cell_orbit`

use hyperwire::{project, sixteen_cell, ObjectTransform, ProjectionConfig, Vec4};

fn main() {
    let cell = sixteen_cell(1.0).expect("fixed size is valid");
    let config = ProjectionConfig::new(5.0, 5.0).expect("fixed distances are valid");
    let mut transform = ObjectTransform::identity();

    // Start well below the singular hyperplane at w = 5 and step across it
    transform.set_position(Vec4::new(0.0, 0.0, 0.0, 2.0));
    let step = Vec4::new(0.0, 0.0, 0.0, 0.25);

    println!("w-offset  visible-edges  skipped-vertices");
    for _ in 0..33 {
        let frame = project(&cell, &transform, &config);
        println!(
            "{:>8.2}  {:>13}  {:>16}",
            transform.position().w,
            frame.visible_segment_count(),
            frame.skipped_vertex_count()
        );
        transform.translate(step);
    }
}
