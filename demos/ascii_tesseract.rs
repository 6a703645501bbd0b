//! ASCII tesseract
//!
//! The smallest possible consumer of the projection boundary: one
//! hypercube, fixed parameters, a handful of frames printed straight to
//! stdout. No configuration, no scene container - just generator,
//! transform, project, draw.
//!
//! Run with: `cargo run --example ascii_tesseract`

use hyperwire::{hypercube, project, ObjectTransform, PlaneAngles, ProjectionConfig};

const WIDTH: usize = 72;
const HEIGHT: usize = 34;
const SCALE: f32 = 11.0;

fn main() {
    let cube = hypercube(2.0).expect("fixed size is valid");
    let config = ProjectionConfig::new(5.0, 5.0).expect("fixed distances are valid");
    let mut transform = ObjectTransform::identity();
    let spin = PlaneAngles { xy: 0.05, zw: 0.04, ..PlaneAngles::ZERO };

    for _ in 0..200 {
        transform.rotate(&spin).expect("fixed spin is finite");
        let frame = project(&cube, &transform, &config);

        let mut cells = vec![' '; WIDTH * HEIGHT];
        for segment in frame.visible_segments() {
            let glyph = if segment.mean_depth() > 0.0 { '#' } else { '.' };
            let dx = segment.end[0] - segment.start[0];
            let dy = segment.end[1] - segment.start[1];
            let steps = ((dx.abs().max(dy.abs())) * SCALE * 2.0).ceil().max(1.0) as usize;
            for i in 0..=steps {
                let t = i as f32 / steps as f32;
                let x = segment.start[0] + dx * t;
                let y = segment.start[1] + dy * t;
                let col = (x * SCALE + WIDTH as f32 / 2.0).round();
                let row = (HEIGHT as f32 / 2.0 - y * SCALE * 0.5).round();
                if col >= 0.0 && row >= 0.0 && (col as usize) < WIDTH && (row as usize) < HEIGHT {
                    cells[row as usize * WIDTH + col as usize] = glyph;
                }
            }
        }

        let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
        for row in cells.chunks(WIDTH) {
            out.extend(row.iter());
            out.push('\n');
        }
        print!("\x1b[H\x1b[2J{}", out);

        std::thread::sleep(std::time::Duration::from_millis(40));
    }
}
