// stagnation.rs - Repeat detection and restart gating

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::LifeConfig;

/// Frozen copy of a grid's cells, used as an equality key.
///
/// Cells are kept in column-major order alongside the grid shape, so two
/// snapshots are equal only when every cell of same-shaped grids matches.
#[derive(Debug, Clone)]
pub struct StateSnapshot {
    cols: usize,
    rows: usize,
    cells: Box<[bool]>,
    hash: u64,
}

impl StateSnapshot {
    pub fn new(cols: usize, rows: usize, cells: &[bool]) -> Self {
        let mut hasher = DefaultHasher::new();
        cols.hash(&mut hasher);
        rows.hash(&mut hasher);
        cells.hash(&mut hasher);
        Self {
            cols,
            rows,
            cells: cells.into(),
            hash: hasher.finish(),
        }
    }
}

impl PartialEq for StateSnapshot {
    fn eq(&self, other: &Self) -> bool {
        // Hash first; the full compare only runs on a likely match
        self.hash == other.hash
            && self.cols == other.cols
            && self.rows == other.rows
            && self.cells == other.cells
    }
}

impl Eq for StateSnapshot {}

impl Hash for StateSnapshot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

/// Result of feeding one generation to the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// New state, appended to the history.
    Recorded,
    /// State seen recently, but the restart cooldown has not run out.
    RepeatSuppressed,
    /// State seen recently and the cooldown has passed; the caller should reseed.
    RestartDue,
}

impl Observation {
    pub fn should_restart(self) -> bool {
        self == Observation::RestartDue
    }
}

/// Watches successive generations for cycles and static states.
///
/// A generation that matches any of the last `max_history` recorded states
/// counts as stagnation. A restart is only granted once strictly more than
/// `restart_after` has passed since the last reset.
#[derive(Debug, Clone)]
pub struct StagnationMonitor {
    history: VecDeque<StateSnapshot>,
    max_history: usize,
    restart_after: Duration,
    last_restart: Instant,
}

impl StagnationMonitor {
    pub fn new(max_history: usize, restart_after: Duration, now: Instant) -> Self {
        Self {
            history: VecDeque::with_capacity(max_history + 1),
            max_history,
            restart_after,
            last_restart: now,
        }
    }

    pub fn from_config(config: &LifeConfig, now: Instant) -> Self {
        Self::new(config.max_history_size, config.restart_after(), now)
    }

    /// Feeds one generation's snapshot.
    pub fn observe(&mut self, snapshot: StateSnapshot, now: Instant) -> Observation {
        if self.history.contains(&snapshot) {
            if self.cooldown_elapsed(now) {
                info!(
                    since_restart_ms = now.saturating_duration_since(self.last_restart).as_millis() as u64,
                    "stagnation detected, restart due"
                );
                self.history.clear();
                return Observation::RestartDue;
            }
            debug!("repeated state inside cooldown");
            return Observation::RepeatSuppressed;
        }

        self.history.push_back(snapshot);
        while self.history.len() > self.max_history {
            self.history.pop_front();
        }
        Observation::Recorded
    }

    /// Forgets all history and restarts the cooldown from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.history.clear();
        self.last_restart = now;
    }

    /// True when strictly more than the cooldown has passed since the last reset.
    pub fn cooldown_elapsed(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_restart) > self.restart_after
    }

    /// Recorded snapshots, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &StateSnapshot> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    pub fn last_restart(&self) -> Instant {
        self.last_restart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: Duration = Duration::from_secs(10);

    fn snap(value: u16) -> StateSnapshot {
        let cells: Vec<bool> = (0..16).map(|bit| value & (1 << bit) != 0).collect();
        StateSnapshot::new(1, 16, &cells)
    }

    #[test]
    fn snapshot_equality_includes_shape() {
        let cells = [true, false, false, true];
        assert_eq!(StateSnapshot::new(2, 2, &cells), StateSnapshot::new(2, 2, &cells));
        assert_ne!(StateSnapshot::new(2, 2, &cells), StateSnapshot::new(1, 4, &cells));
        assert_ne!(snap(1), snap(2));
    }

    #[test]
    fn history_keeps_most_recent_entries_in_order() {
        let t0 = Instant::now();
        let mut monitor = StagnationMonitor::new(10, COOLDOWN, t0);
        for value in 0..13 {
            assert_eq!(monitor.observe(snap(value), t0), Observation::Recorded);
        }
        assert_eq!(monitor.len(), monitor.max_history());
        let kept: Vec<_> = monitor.history().cloned().collect();
        let expected: Vec<_> = (3..13).map(snap).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn repeat_inside_cooldown_is_suppressed() {
        let t0 = Instant::now();
        let mut monitor = StagnationMonitor::new(10, COOLDOWN, t0);
        monitor.observe(snap(1), t0);
        monitor.observe(snap(2), t0);

        let outcome = monitor.observe(snap(1), t0 + Duration::from_secs(3));
        assert_eq!(outcome, Observation::RepeatSuppressed);
        assert!(!outcome.should_restart());
        assert_eq!(monitor.len(), 2);
    }

    #[test]
    fn cooldown_boundary_is_strict() {
        let t0 = Instant::now();
        let mut monitor = StagnationMonitor::new(10, COOLDOWN, t0);
        monitor.observe(snap(5), t0);

        assert_eq!(monitor.observe(snap(5), t0 + COOLDOWN), Observation::RepeatSuppressed);
        assert_eq!(monitor.len(), 1);

        let later = t0 + COOLDOWN + Duration::from_millis(1);
        let outcome = monitor.observe(snap(5), later);
        assert!(outcome.should_restart());
        assert!(monitor.is_empty());
    }

    #[test]
    fn evicted_states_no_longer_count_as_repeats() {
        let t0 = Instant::now();
        let mut monitor = StagnationMonitor::new(3, COOLDOWN, t0);
        for value in [1, 2, 3, 4] {
            monitor.observe(snap(value), t0);
        }
        let late = t0 + Duration::from_secs(60);
        assert_eq!(monitor.observe(snap(1), late), Observation::Recorded);
        assert_eq!(monitor.observe(snap(3), late), Observation::RestartDue);
    }

    #[test]
    fn reset_clears_history_and_restarts_cooldown() {
        let t0 = Instant::now();
        let mut monitor = StagnationMonitor::new(10, COOLDOWN, t0);
        monitor.observe(snap(9), t0);

        let t1 = t0 + Duration::from_secs(30);
        monitor.reset(t1);
        assert!(monitor.is_empty());
        assert_eq!(monitor.last_restart(), t1);
        assert!(!monitor.cooldown_elapsed(t1 + COOLDOWN));
        assert!(monitor.cooldown_elapsed(t1 + COOLDOWN + Duration::from_nanos(1)));
    }

    #[test]
    fn clock_going_backwards_never_restarts() {
        let t0 = Instant::now() + Duration::from_secs(100);
        let monitor = StagnationMonitor::new(10, COOLDOWN, t0);
        assert!(!monitor.cooldown_elapsed(t0 - Duration::from_secs(50)));
    }
}
