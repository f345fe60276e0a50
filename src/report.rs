//! Search progress reporting.
//!
//! The engine emits three kinds of records:
//!
//! | Record | When |
//! |--------|------|
//! | `ChromosomeLine` | after each chromosome is built (verbose runs only) |
//! | `GenerationSummary` | once per generation when the search ends |
//! | `CostSeries` | once, for plotting min/avg/max cost per generation |
//!
//! Records go to a [`RunObserver`]. [`LogObserver`] writes them through
//! the `log` facade; rendering plots is left to the consumer.

use std::fmt;

use log::info;
use serde::Serialize;

use crate::ga::Chromosome;

/// Description of one chromosome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromosomeLine {
    /// Chromosome id.
    pub id: usize,
    /// Generation index.
    pub generation: usize,
    /// Hard-constraint feasibility.
    pub feasible: bool,
    /// Soft-constraint cost.
    pub cost: u64,
    /// Improvement over parents in percent (bred chromosomes only).
    pub improvement_pct: Option<f64>,
}

impl From<&Chromosome> for ChromosomeLine {
    fn from(ch: &Chromosome) -> Self {
        Self {
            id: ch.id(),
            generation: ch.generation(),
            feasible: ch.is_feasible(),
            cost: ch.cost(),
            improvement_pct: ch.improvement().map(|r| r * 100.0),
        }
    }
}

impl fmt::Display for ChromosomeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chromosome {}[{}], feasible: {}, penalty cost: {}",
            self.id, self.generation, self.feasible, self.cost
        )?;
        if let Some(pct) = self.improvement_pct {
            write!(f, ", improvement: {pct:.3}%")?;
        }
        Ok(())
    }
}

/// Cost statistics of one generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSummary {
    /// Generation index.
    pub generation: usize,
    /// Number of chromosomes.
    pub size: usize,
    /// Lowest cost.
    pub min_cost: u64,
    /// Mean cost.
    pub avg_cost: f64,
    /// Highest cost.
    pub max_cost: u64,
    /// Number of staffing-feasible chromosomes.
    pub feasible: usize,
}

impl GenerationSummary {
    /// Computes statistics over a generation. `None` if it is empty.
    pub fn calculate(generation: usize, chromosomes: &[Chromosome]) -> Option<Self> {
        let min_cost = chromosomes.iter().map(Chromosome::cost).min()?;
        let max_cost = chromosomes.iter().map(Chromosome::cost).max()?;
        let total: f64 = chromosomes.iter().map(|c| c.cost() as f64).sum();
        Some(Self {
            generation,
            size: chromosomes.len(),
            min_cost,
            avg_cost: total / chromosomes.len() as f64,
            max_cost,
            feasible: chromosomes.iter().filter(|c| c.is_feasible()).count(),
        })
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation {} [{}]\t -> lowest: {}, average: {:.2}, highest: {}",
            self.generation, self.size, self.min_cost, self.avg_cost, self.max_cost
        )
    }
}

/// One plot point: `(min, avg, max)` cost of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostPoint {
    /// Generation index.
    pub generation: usize,
    /// Lowest cost.
    pub min: f64,
    /// Mean cost.
    pub avg: f64,
    /// Highest cost.
    pub max: f64,
}

/// Cost trend across generations, ordered by generation index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostSeries {
    /// Points, one per generation.
    pub points: Vec<CostPoint>,
}

impl CostSeries {
    /// Builds the series from generation summaries.
    pub fn from_summaries(summaries: &[GenerationSummary]) -> Self {
        let points = summaries
            .iter()
            .map(|s| CostPoint {
                generation: s.generation,
                min: s.min_cost as f64,
                avg: s.avg_cost,
                max: s.max_cost as f64,
            })
            .collect();
        Self { points }
    }

    /// Number of generations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Receives progress records from the search engine.
///
/// All methods default to doing nothing.
pub trait RunObserver {
    /// A chromosome was built and evaluated (verbose runs only).
    fn on_chromosome(&mut self, _line: &ChromosomeLine) {}

    /// Average improvement-over-parent of a freshly bred generation
    /// (only when early stopping is enabled).
    fn on_generation_improvement(&mut self, _generation: usize, _average: f64) {}

    /// Summary of one generation, emitted in order once the search ends.
    fn on_generation(&mut self, _summary: &GenerationSummary) {}

    /// Final cost series for plotting.
    fn on_finish(&mut self, _series: &CostSeries) {}
}

/// Observer that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl RunObserver for Silent {}

/// Observer that writes records through the `log` facade at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RunObserver for LogObserver {
    fn on_chromosome(&mut self, line: &ChromosomeLine) {
        info!("{line}");
    }

    fn on_generation_improvement(&mut self, generation: usize, average: f64) {
        info!("GENERATION {generation}: {average} improvement over previous gen.");
    }

    fn on_generation(&mut self, summary: &GenerationSummary) {
        if summary.generation == 0 {
            info!("=============SUMMARY=============");
        }
        info!("{summary}");
    }

    fn on_finish(&mut self, series: &CostSeries) {
        info!("cost series ready: {} generations", series.len());
    }
}
