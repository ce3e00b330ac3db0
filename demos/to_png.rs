use std::env::args;
use std::fs::write;
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use bezier_sketch::*;
use std::time::Instant;

fn main() {
	let png_name = args().nth(1).unwrap_or("curves.png".into());
	let (w, h) = (300, 300);

	let mut session = EditorSession::new();
	session.canvas_resized(w as f32, h as f32);
	session.show_control_points();

	// a fan of curves leaving the left edge
	for i in 0..6 {
		let y = 30.0 + 48.0 * i as f32;
		session.pointer_pressed(Point::new(30.0, y));
		session.pointer_moved(Point::new(150.0, 150.0));
		session.pointer_moved(Point::new(270.0, 300.0 - y));
		session.pointer_released(Point::new(270.0, 300.0 - y));
	}

	// one still in progress
	session.pointer_pressed(Point::new(60.0, 270.0));
	session.pointer_moved(Point::new(240.0, 30.0));

	let frame = session.frame();
	println!("{} curves, {} primitives", session.store().len(), frame.len());

	let mut canvas = Canvas::new(w, h).unwrap();
	let runs = 10;
	let now = Instant::now();
	for _ in 0..runs {
		canvas.clear(Color::new(255, 255, 255, 255));
		canvas.paint::<4, 16>(&frame);
	}
	println!("painted {} times in {}ms.", runs, now.elapsed().as_millis());

	let bytes: Vec<u8> = canvas.pixels().iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect();
	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgba);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(&bytes).unwrap();
	}
	write(&png_name, &png_buf).unwrap();
}
