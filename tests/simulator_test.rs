//! Simulator Tests
//!
//! End-to-end scenarios through the public API, using the classic
//! reference strings from operating systems textbooks.

use pagesim::{
    compare, parse_references, simulate_fifo, simulate_lru, simulate_opt, Error, FillPhase,
    PageId, Policy, ReferenceGenerator, Simulator,
};

/// Reference string with Belady's anomaly under FIFO.
const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

/// Reference string from Silberschatz et al., chapter 10.
const SILBERSCHATZ: [u32; 20] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];

// ============================================================================
// Textbook scenarios
// ============================================================================

/// Classic 9 / 10 / 7 fault counts with three frames.
#[test]
fn test_belady_string_three_frames() {
    assert_eq!(simulate_fifo(3, &BELADY), Ok(9));
    assert_eq!(simulate_lru(3, &BELADY), Ok(10));
    assert_eq!(simulate_opt(3, &BELADY), Ok(7));
}

/// Adding a fourth frame hurts FIFO but helps LRU and OPT.
#[test]
fn test_belady_string_four_frames() {
    // FIFO gets worse with an extra frame, LRU and OPT do not.
    assert_eq!(simulate_fifo(4, &BELADY), Ok(10));
    assert_eq!(simulate_lru(4, &BELADY), Ok(8));
    assert_eq!(simulate_opt(4, &BELADY), Ok(6));
}

/// Textbook 15 / 12 / 9 fault counts for the Silberschatz string.
#[test]
fn test_silberschatz_string() {
    let report = compare(3, &SILBERSCHATZ).unwrap();

    assert_eq!(report.fifo.faults, 15);
    assert_eq!(report.lru.faults, 12);
    assert_eq!(report.opt.faults, 9);
}

/// One frame and no repeats: every reference faults.
#[test]
fn test_single_frame_every_reference_faults() {
    for policy in Policy::ALL {
        assert_eq!(pagesim::simulate(policy, 1, &[1u32, 2, 3]), Ok(3));
    }
}

/// One frame still serves back-to-back repeats.
#[test]
fn test_single_frame_repeats_hit() {
    let refs = [4u32, 4, 4, 2, 2, 4];

    for policy in Policy::ALL {
        assert_eq!(pagesim::simulate(policy, 1, &refs), Ok(3), "{}", policy);
    }
}

/// An empty sequence produces no faults, hits or evictions.
#[test]
fn test_empty_sequence() {
    let report = compare::<u32>(4, &[]).unwrap();

    for stats in report.iter() {
        assert_eq!(stats.faults, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.evictions, 0);
    }
}

/// Zero frames is rejected before any simulation runs.
#[test]
fn test_zero_frames_is_an_error() {
    assert_eq!(compare(0, &BELADY), Err(Error::InvalidFrameCount(0)));
    assert!(Simulator::new(0).is_err());
}

// ============================================================================
// Fill phase
// ============================================================================

/// Legacy fill faults on every reference while frames are free.
#[test]
fn test_fill_counts_min_of_frames_and_len() {
    // No eviction ever happens: legacy fill faults on every reference.
    let refs = [1u32, 1, 2, 2];

    for policy in Policy::ALL {
        assert_eq!(pagesim::simulate(policy, 7, &refs), Ok(4));
    }
}

/// Checked fill only faults on the first reference to each page.
#[test]
fn test_checked_fill_counts_distinct_pages() {
    let refs = [1u32, 1, 2, 2, 3, 1];
    let sim = Simulator::new(7).unwrap().fill_phase(FillPhase::Checked);

    for policy in Policy::ALL {
        let stats = sim.run(policy, &refs);
        assert_eq!(stats.faults, 3);
        assert_eq!(stats.hits, 3);
    }
}

/// Both fill modes agree when nothing repeats before memory is full.
#[test]
fn test_fill_modes_agree_without_early_repeats() {
    let legacy = Simulator::new(3).unwrap();
    let checked = Simulator::new(3).unwrap().fill_phase(FillPhase::Checked);

    for policy in Policy::ALL {
        assert_eq!(
            legacy.run(policy, &SILBERSCHATZ),
            checked.run(policy, &SILBERSCHATZ)
        );
    }
}

// ============================================================================
// Workload integration
// ============================================================================

/// A parsed sequence runs the same as the literal one.
#[test]
fn test_parsed_sequence() {
    let refs = parse_references("1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5").unwrap();
    let expected: Vec<PageId> = BELADY.iter().copied().map(PageId::new).collect();

    assert_eq!(refs, expected);
    assert_eq!(simulate_opt(3, &refs), Ok(7));
}

/// The same seed gives the same sequence and the same report.
#[test]
fn test_random_sequence_reproducible() {
    let refs = ReferenceGenerator::new(2020).generate(100);
    let again = ReferenceGenerator::new(2020).generate(100);

    assert_eq!(compare(4, &refs), compare(4, &again));
}

/// OPT never faults more than FIFO or LRU on random input.
#[test]
fn test_random_sequence_opt_is_best() {
    let mut generator = ReferenceGenerator::new(99);
    let sim = Simulator::new(3).unwrap().fill_phase(FillPhase::Checked);

    for _ in 0..50 {
        let refs = generator.generate_random_len();
        let fifo = sim.run(Policy::Fifo, &refs).faults;
        let lru = sim.run(Policy::Lru, &refs).faults;
        let opt = sim.run(Policy::Opt, &refs).faults;

        assert!(opt <= lru);
        assert!(opt <= fifo);
    }
}
