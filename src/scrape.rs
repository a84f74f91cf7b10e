// src/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicBool, AtomicUsize, Ordering }},
};

use indexmap::IndexMap;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    config::consts::JITTER_MS,
    config::options::ScrapeOptions,
    core::net::PageSource,
    error::{Error, Result},
    progress::Progress,
    specs::{areas, encounters},
};

/// Area → the one species rolled for it, in area order.
pub type Encounters = IndexMap<String, String>;

/// RNG for a run: fixed seed when asked for, OS entropy otherwise.
pub fn rng_for(opts: &ScrapeOptions) -> StdRng {
    match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniform pick among an area's candidates.
pub fn pick_encounter<'a, R: Rng + ?Sized>(candidates: &'a [String], rng: &mut R) -> Option<&'a String> {
    candidates.choose(rng)
}

/// Fetch every area page with a small worker pool. Each worker builds its own
/// tables, so nothing is shared but the work counter and the result channel.
///
/// Returns candidates per area, index-aligned with `pages`; `None` marks an
/// area whose page could not be fetched.
pub fn collect_candidates(
    source: &dyn PageSource,
    pages: &[(&str, &str)],
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Option<Vec<String>>>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    let mut results: Vec<Option<Vec<String>>> = vec![None; pages.len()];
    let mut fatal: Option<Error> = None;

    let counter = AtomicUsize::new(0);
    let stop = AtomicBool::new(false);
    let workers = opts.workers.min(pages.len()).max(1);
    let (res_tx, res_rx) = mpsc::channel::<(usize, Result<Vec<String>>)>();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (counter, stop) = (&counter, &stop);

            scope.spawn(move || {
                loop {
                    if stop.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    if i >= pages.len() {
                        break;
                    }
                    let (area, page) = pages[i];
                    logf!("Looking up random encounters for {area}...");
                    let result = encounters::fetch_candidates(source, page);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    let jitter = (i as u64 * 7) % JITTER_MS.max(1);
                    thread::sleep(Duration::from_millis(opts.pause_ms + jitter)); // be polite
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Aggregate results
        for (i, result) in res_rx {
            let area = pages[i].0;
            match result {
                Ok(candidates) => {
                    logd!("Possible encounters for {area}: {candidates:?}");
                    results[i] = Some(candidates);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(area);
                    }
                }
                Err(Error::Structure(v)) => {
                    loge!("{area}: {v}");
                    stop.store(true, Ordering::Relaxed);
                    if fatal.is_none() {
                        fatal = Some(Error::Structure(v));
                    }
                }
                Err(e) => {
                    loge!("{area}: {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(area, &e.to_string());
                    }
                }
            }
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    match fatal {
        Some(e) => Err(e),
        None => Ok(results),
    }
}

/// Whole run: discover the region's areas, gather candidates per area, then
/// roll one encounter per area on this thread so a seeded `rng` gives the
/// same result regardless of worker scheduling.
pub fn collect_encounters<R: Rng + ?Sized>(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    rng: &mut R,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Encounters> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Discovering areas in {}…", opts.region.slug()));
    }
    let areas = areas::fetch_areas(source, opts.region)?;
    logd!("Found {} areas in {}", areas.len(), opts.region.slug());

    let pages: Vec<(&str, &str)> = areas
        .iter()
        .map(|(area, page)| (area.as_str(), page.as_str()))
        .collect();
    let per_area = collect_candidates(source, &pages, opts, progress)?;

    let mut out = Encounters::new();
    for ((area, _), candidates) in pages.iter().zip(per_area) {
        let Some(candidates) = candidates else { continue };
        match pick_encounter(&candidates, rng) {
            Some(species) => {
                logd!("Selected {species} from {area}");
                out.insert(s!(*area), species.clone());
            }
            None => logf!("No possible encounter from: {area}"),
        }
    }
    Ok(out)
}
