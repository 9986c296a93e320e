use std::path::PathBuf;

use structopt::StructOpt;

use sphere_raycast::{parsing::load_query, RaycastReport};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sphere_raycast",
    about = "Casts the ray of a query file against its sphere"
)]
struct Opt {
    /// query json with a `sphere` and a `ray`
    #[structopt(parse(from_os_str))]
    query: PathBuf,

    /// more logging, repeat for more
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    #[structopt(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_module("sphere_raycast", level)
        .init();

    let query = load_query(&opt.query)?;
    log::info!("casting {:?} against {:?}", query.ray, query.sphere);

    let result = query.run();
    match &result {
        Some(isect) => log::info!("hit at t = {}", isect.distance),
        None => log::info!("no hit"),
    }

    let report = RaycastReport::from(result);
    let output = if opt.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);
    Ok(())
}
