use anyhow::Result;
use clap::Parser;

use pagesim::common::config::{MAX_FRAMES, MIN_FRAMES};
use pagesim::{
    belady_anomalies, fault_curve, parse_references, Error, FillPhase, PageId, Policy,
    ReferenceGenerator, Simulator,
};

/// Compare page faults under FIFO, LRU and OPT replacement.
#[derive(Parser, Debug)]
#[command(name = "pagesim", version, about)]
struct Args {
    /// Number of memory frames
    frames: usize,

    /// Number of random page references (random length when omitted)
    #[arg(conflicts_with = "refs")]
    pages: Option<usize>,

    /// Seed for the random reference generator
    #[arg(long)]
    seed: Option<u64>,

    /// Explicit reference sequence, e.g. "7,0,1,2,0,3"
    #[arg(long)]
    refs: Option<String>,

    /// Policies to run (fifo, lru, opt); all three by default
    #[arg(long = "policy", value_name = "POLICY")]
    policies: Vec<Policy>,

    /// Count fill-phase references to resident pages as hits
    #[arg(long)]
    checked_fill: bool,

    /// Also print the FIFO fault curve and any Belady anomalies
    #[arg(long)]
    curve: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    check_frames(args.frames)?;

    let (label, references) = match &args.refs {
        Some(text) => ("Page References", parse_references(text)?),
        None => {
            let mut generator = match args.seed {
                Some(seed) => ReferenceGenerator::new(seed),
                None => ReferenceGenerator::from_entropy(),
            };
            let refs = match args.pages {
                Some(len) => generator.generate(len),
                None => generator.generate_random_len(),
            };
            ("Random Page References", refs)
        }
    };

    let fill_phase = if args.checked_fill {
        FillPhase::Checked
    } else {
        FillPhase::Legacy
    };
    let sim = Simulator::new(args.frames)?.fill_phase(fill_phase);

    let policies = if args.policies.is_empty() {
        Policy::ALL.to_vec()
    } else {
        args.policies.clone()
    };

    println!("{}: {}", label, format_references(&references));
    println!("Number of Page References: {}", references.len());
    println!("Number of Frames: {}", args.frames);
    for policy in policies {
        let stats = sim.run(policy, &references);
        println!("{} {} page faults.", policy, stats.faults);
    }

    if args.curve {
        let curve = fault_curve(Policy::Fifo, &references, MIN_FRAMES..=MAX_FRAMES, fill_phase)?;
        println!();
        println!("FIFO fault curve:");
        for (frames, faults) in &curve {
            println!("  {} frames: {} page faults", frames, faults);
        }
        let anomalies = belady_anomalies(&curve);
        if anomalies.is_empty() {
            println!("No Belady's anomaly.");
        } else {
            println!("Belady's anomaly at frame counts {:?}", anomalies);
        }
    }

    Ok(())
}

/// Reject frame counts outside the range the driver accepts.
fn check_frames(frames: usize) -> pagesim::Result<()> {
    if !(MIN_FRAMES..=MAX_FRAMES).contains(&frames) {
        return Err(Error::FrameCountOutOfRange {
            count: frames,
            min: MIN_FRAMES,
            max: MAX_FRAMES,
        });
    }
    Ok(())
}

fn format_references(references: &[PageId]) -> String {
    let items: Vec<String> = references.iter().map(|p| p.0.to_string()).collect();
    format!("[{}]", items.join(", "))
}
