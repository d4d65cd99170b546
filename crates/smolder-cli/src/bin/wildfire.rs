//! Wildfire reference driver: one seeded run rendered to an animated GIF.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use smolder::prelude::*;

const BOUNDS: Point = Point::new(50, 50);
const GENERATIONS: usize = 250;
const TARGET_PX: u32 = 500;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let rule = Wildfire::default();
    let mut stream = EntropyStream::from_os_entropy()?;
    let initial = wildfire::basic_field(BOUNDS, rule, &mut stream)?;
    let history = run(initial, GENERATIONS, &mut stream);

    let frames: Vec<_> = history[1..]
        .iter()
        .map(|field| rasterize(field, TARGET_PX))
        .collect();
    let palette = StatePalette::for_rule(&rule);
    let indexed = quantize(&frames, &palette);

    let stamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let path = format!("wildfire_{:.4}_{stamp}.gif", rule.ignition_probability());
    let file = BufWriter::new(File::create(&path)?);
    encode_gif(file, &indexed, &palette, FRAME_DELAY_CS)?;

    info!("wrote {} generations to {path}", indexed.len());
    Ok(())
}
