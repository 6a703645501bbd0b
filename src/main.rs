//! Hyperwire - terminal 4D wireframe viewer
//!
//! Reference consumer for the projection pipeline: builds the configured
//! polytope, spins it a little each tick, projects it, and draws the
//! resulting 2D segments as characters. Everything on the screen side of
//! the `project` call - cell mapping, glyphs, frame pacing - lives here,
//! outside the geometry core.

use hyperwire::config::AppConfig;
use hyperwire::{
    hypercube, simplex, sixteen_cell, GeometryError, ObjectTransform, Polytope, ProjectionConfig,
    Scene, SceneObject, SceneWireframes, Segment2D, Vec4,
};

fn build_polytope(primitive: &str, size: f32) -> Result<Polytope, GeometryError> {
    match primitive {
        "hypercube" | "tesseract" => hypercube(size),
        "simplex" | "5-cell" => simplex(size),
        "sixteen-cell" | "16-cell" => sixteen_cell(size),
        other => panic!(
            "Unknown primitive '{}' (expected hypercube, simplex, or sixteen-cell)",
            other
        ),
    }
}

/// Character-cell canvas for wireframe segments
///
/// Terminal cells are roughly twice as tall as wide, so y is compressed by
/// half when mapping world units to cells.
struct Canvas {
    width: usize,
    height: usize,
    scale: f32,
    cells: Vec<char>,
}

impl Canvas {
    fn new(width: usize, height: usize, scale: f32) -> Self {
        Self {
            width,
            height,
            scale,
            cells: vec![' '; width * height],
        }
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn plot(&mut self, x: f32, y: f32, glyph: char) {
        let col = (x * self.scale + self.width as f32 / 2.0).round();
        let row = (self.height as f32 / 2.0 - y * self.scale * 0.5).round();
        if col >= 0.0 && row >= 0.0 && (col as usize) < self.width && (row as usize) < self.height {
            self.cells[row as usize * self.width + col as usize] = glyph;
        }
    }

    fn draw_segment(&mut self, segment: &Segment2D, camera_3d_distance: f32) {
        // Nearer segments (larger depth, closer to the 3D camera) get
        // heavier glyphs - the consumer-side depth cue
        let glyph = if segment.mean_depth() > camera_3d_distance * 0.1 {
            '#'
        } else if segment.mean_depth() > -camera_3d_distance * 0.1 {
            '+'
        } else {
            '.'
        };

        let dx = segment.end[0] - segment.start[0];
        let dy = segment.end[1] - segment.start[1];
        let steps = ((dx.abs().max(dy.abs())) * self.scale * 2.0).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.plot(segment.start[0] + dx * t, segment.start[1] + dy * t, glyph);
        }
    }

    fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

fn main() {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.debug.log_level),
    )
    .init();

    let projection: ProjectionConfig = config
        .projection
        .to_projection_config()
        .unwrap_or_else(|e| panic!("Bad projection configuration: {}", e));

    let polytope = build_polytope(&config.shape.primitive, config.shape.size)
        .unwrap_or_else(|e| panic!("Bad shape configuration: {}", e));

    log::info!(
        "Displaying {} ({} vertices, {} edges), cameras at {}/{}",
        config.shape.primitive,
        polytope.vertex_count(),
        polytope.edge_count(),
        projection.camera_4d_distance(),
        projection.camera_3d_distance()
    );

    let mut scene = Scene::new();
    let [x, y, z, w] = config.shape.position;
    let key = scene.add_object(
        SceneObject::new(polytope)
            .with_name(config.shape.primitive.clone())
            .with_transform(ObjectTransform::from_position(Vec4::new(x, y, z, w))),
    );

    let mut canvas = Canvas::new(
        config.viewport.width,
        config.viewport.height,
        config.viewport.scale,
    );

    let spin = config.animation.spin;
    let mut frame: u32 = 0;
    loop {
        if config.animation.frames > 0 && frame >= config.animation.frames {
            break;
        }

        {
            let object = scene.get_object_mut(key).unwrap();
            object
                .transform
                .rotate(&spin)
                .unwrap_or_else(|e| panic!("Bad spin configuration: {}", e));
            // Keep the accumulated orientation from drifting
            if frame % 256 == 255 {
                object.transform.renormalize();
            }
        }

        let frames = SceneWireframes::from_scene(&scene, &projection);

        canvas.clear();
        for segment in frames.segments() {
            canvas.draw_segment(&segment, projection.camera_3d_distance());
        }

        // Home the cursor and repaint
        print!("\x1b[H\x1b[2J{}", canvas.render());

        if config.debug.frame_stats {
            log::debug!(
                "frame {}: {} segments, {} skipped vertices",
                frame,
                frames.total_visible_segments(),
                frames.total_skipped_vertices()
            );
        }

        std::thread::sleep(std::time::Duration::from_millis(config.animation.frame_delay_ms));
        frame += 1;
    }
}
