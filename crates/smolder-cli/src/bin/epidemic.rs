//! Epidemic reference driver: one seeded run rendered to an animated GIF,
//! with the per-generation census series printed for external plotting.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use smolder::prelude::*;

const BOUNDS: Point = Point::new(25, 25);
const GENERATIONS: usize = 250;
const TARGET_PX: u32 = 500;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let rule = Epidemic::default();
    let mut stream = EntropyStream::from_os_entropy()?;
    let initial = epidemic::basic_field(BOUNDS, rule)?;
    let history = run(initial, GENERATIONS, &mut stream);

    let censuses: Vec<Census> = history[1..].iter().map(Census::of).collect();
    print_series(&censuses);

    let frames: Vec<_> = history[1..]
        .iter()
        .map(|field| rasterize(field, TARGET_PX))
        .collect();
    let palette = StatePalette::for_rule(&rule);
    let indexed = quantize(&frames, &palette);

    let stamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let path = format!(
        "epidemic_{:.2}_{:.2}_{stamp}.gif",
        rule.infection_probability(),
        rule.recovery_probability()
    );
    let file = BufWriter::new(File::create(&path)?);
    encode_gif(file, &indexed, &palette, FRAME_DELAY_CS)?;

    info!("wrote {} generations to {path}", indexed.len());
    Ok(())
}

/// Print the census series as three plottable arrays.
fn print_series(censuses: &[Census]) {
    let join = |select: fn(&Census) -> usize| {
        censuses
            .iter()
            .map(|census| select(census).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("h = [{}]", join(|c| c.healthy));
    println!("s = [{}]", join(|c| c.sick));
    println!("i = [{}]", join(|c| c.immune));
}
