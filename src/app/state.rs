use std::collections::HashSet;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::widgets::TableState;

use crate::model::PortEntry;
use crate::ports;
use crate::ports::kill::kill_pids;
use crate::stats::{StatsSnapshot, SystemStats};

pub enum InputMode {
    Normal,
    /// Typing into the fuzzy filter line.
    Filter,
}

pub const HELP_LINE: &str =
    "j/k move  space select  enter/x kill  r reload  / filter  q quit";

pub struct AppState {
    pub mode: InputMode,
    pub entries: Vec<PortEntry>,
    /// Indices into `entries`, in display order after filtering.
    pub filtered: Vec<usize>,
    pub table_state: TableState,
    /// Multi-select, as indices into `entries`. Cleared on every refresh:
    /// entries carry no identity across passes.
    pub selected: HashSet<usize>,
    pub filter_input: String,
    pub status: String,
    pub status_ok: bool,
    pub stats: StatsSnapshot,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(entries: Vec<PortEntry>) -> Self {
        let filtered: Vec<usize> = (0..entries.len()).collect();
        let mut table_state = TableState::default();
        if !filtered.is_empty() {
            table_state.select(Some(0));
        }
        Self {
            mode: InputMode::Normal,
            entries,
            filtered,
            table_state,
            selected: HashSet::new(),
            filter_input: String::new(),
            status: HELP_LINE.to_string(),
            status_ok: true,
            stats: StatsSnapshot::default(),
            should_quit: false,
        }
    }

    /// Full independent re-scan: new entry sequence, fresh dashboard
    /// sample, selection discarded.
    pub fn refresh(&mut self, stats: &mut SystemStats) {
        self.entries = ports::list_ports();
        self.selected.clear();
        self.stats = stats.sample();
        self.update_filter();
    }

    /// Apply the fuzzy filter to the entry list, best matches first.
    pub fn update_filter(&mut self) {
        if self.filter_input.is_empty() {
            self.filtered = (0..self.entries.len()).collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let query = &self.filter_input;

            let mut scored: Vec<(usize, i64)> = self
                .entries
                .iter()
                .enumerate()
                .filter_map(|(i, e)| {
                    let haystack = format!(
                        "{} {} {} {} {}",
                        e.local_port, e.proto, e.process_name, e.user_name, e.tag
                    );
                    matcher.fuzzy_match(&haystack, query).map(|score| (i, score))
                })
                .collect();

            scored.sort_by(|a, b| b.1.cmp(&a.1));
            self.filtered = scored.into_iter().map(|(i, _)| i).collect();
        }

        if self.filtered.is_empty() {
            self.table_state.select(None);
        } else {
            let cursor = self
                .table_state
                .selected()
                .unwrap_or(0)
                .min(self.filtered.len() - 1);
            self.table_state.select(Some(cursor));
        }
    }

    pub fn move_cursor(&mut self, delta: i32) {
        if self.filtered.is_empty() {
            return;
        }
        let len = self.filtered.len() as i32;
        let current = self.table_state.selected().unwrap_or(0) as i32;
        let next = (current + delta).clamp(0, len - 1);
        self.table_state.select(Some(next as usize));
    }

    /// Entry index under the cursor, if any.
    pub fn cursor_entry(&self) -> Option<usize> {
        self.table_state
            .selected()
            .and_then(|row| self.filtered.get(row).copied())
    }

    pub fn toggle_select(&mut self) {
        if let Some(idx) = self.cursor_entry() {
            if !self.selected.remove(&idx) {
                self.selected.insert(idx);
            }
        }
    }

    /// PIDs of the selected rows, or the cursor row when nothing is
    /// selected. Kernel-owned rows contribute nothing.
    pub fn pids_to_kill(&self) -> Vec<i32> {
        let mut pids: Vec<i32> = self
            .filtered
            .iter()
            .filter(|idx| self.selected.contains(idx))
            .filter_map(|&idx| {
                let pid = self.entries[idx].pid;
                (pid > 0).then_some(pid)
            })
            .collect();

        if pids.is_empty() {
            if let Some(idx) = self.cursor_entry() {
                let pid = self.entries[idx].pid;
                if pid > 0 {
                    pids.push(pid);
                }
            }
        }
        pids
    }

    /// Kill the selected processes and fold the outcome into the status
    /// line.
    pub fn kill_selected(&mut self, stats: &mut SystemStats) {
        let pids = self.pids_to_kill();
        if pids.is_empty() {
            self.set_status(crate::ports::kill::NO_VALID_PIDS.to_string(), false);
            return;
        }

        let msgs = kill_pids(&pids);
        let ok = !msgs.iter().any(|m| {
            let m = m.to_lowercase();
            m.contains("fail") || m.contains("error") || m.contains("no such")
        });
        self.set_status(msgs.join(" | "), ok);
        self.refresh(stats);
    }

    pub fn set_status(&mut self, status: String, ok: bool) {
        self.status = status;
        self.status_ok = ok;
    }
}
