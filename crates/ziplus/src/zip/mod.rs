//! Row combinator: `zip` over N columns with per-column fill policies.
//!
//! Each step pulls every live column once, left to right. A column that runs
//! dry either ends iteration (`Stop`), fails the step (`Raise`), or is filled
//! (`Previous`, `Constant`). Iteration also ends cleanly once every column is
//! exhausted; the step in which the last live column runs dry yields no row.


use crate::{
    column::{Column, ColumnState},
    config::{ZipConfig, resolve_policies},
    error::ConfigError,
    policy::FillPolicy,
    row::Row,
    trace::{ZipTrace, ZipTraceEvent, ZipTraceSink},
    value::FillValue,
};
use std::iter::FusedIterator;

/// Build a combinator over `columns`. `None` policies default every column to
/// `Stop`, which reproduces a truncate-at-shortest `zip`.
pub fn combine<'a, T, E, C>(
    columns: C,
    policies: Option<Vec<FillPolicy<T, E>>>,
) -> Result<ZipPlus<'a, T, E>, ConfigError>
where
    C: IntoIterator<Item = Column<'a, T>>,
{
    let columns: Vec<_> = columns.into_iter().collect();
    let policies = resolve_policies(columns.len(), policies)?;

    Ok(ZipPlus::from_parts(columns, policies))
}

///
/// ZipPlus
///
/// Single-pass, pull-based row combinator. Yields `Ok(row)` per step and
/// `None` once finished. A `Raise(e)` column yields `Err(e)` on every request
/// after its exhaustion; the combinator's state past that point is not
/// meaningful and callers should stop pulling.
///
/// The `Err` stream is unbounded unless a `Stop` column to the left of the
/// raising column runs dry: `count()`, `last()` or a `for` loop without a
/// `break` may never return once a raise trips. Stop at the first error or
/// drain with `try_collect_rows`.
///

#[derive(Debug)]
pub struct ZipPlus<'a, T, E> {
    columns: Vec<Column<'a, T>>,
    policies: Vec<FillPolicy<T, E>>,
    states: Vec<ColumnState>,
    previous: Option<Row<T>>,
    keep_previous: bool,
    exhausted: usize,
    rows: u64,
    finished: bool,
    trace: ZipTrace,
}

impl<'a, T, E> ZipPlus<'a, T, E> {
    /// All-`Stop` combinator over `columns`.
    pub fn new<C>(columns: C) -> Self
    where
        C: IntoIterator<Item = Column<'a, T>>,
    {
        let columns: Vec<_> = columns.into_iter().collect();
        let policies = FillPolicy::all_stop(columns.len());

        Self::from_parts(columns, policies)
    }

    /// Combinator with one explicit policy per column.
    pub fn with_policies<C, P>(columns: C, policies: P) -> Result<Self, ConfigError>
    where
        C: IntoIterator<Item = Column<'a, T>>,
        P: IntoIterator<Item = FillPolicy<T, E>>,
    {
        combine(columns, Some(policies.into_iter().collect()))
    }

    /// Combinator whose policies and debug flag come from `config`.
    pub fn from_config<C>(columns: C, config: &ZipConfig<T, E>) -> Result<Self, ConfigError>
    where
        C: IntoIterator<Item = Column<'a, T>>,
        T: Clone,
        E: Clone,
    {
        let combinator = combine(columns, config.policies.clone())?;

        Ok(combinator.debug(config.debug))
    }

    fn from_parts(columns: Vec<Column<'a, T>>, policies: Vec<FillPolicy<T, E>>) -> Self {
        let keep_previous = policies
            .iter()
            .any(|policy| matches!(policy, FillPolicy::Previous));

        Self {
            states: vec![ColumnState::default(); columns.len()],
            columns,
            policies,
            previous: None,
            keep_previous,
            exhausted: 0,
            rows: 0,
            finished: false,
            trace: ZipTrace::default(),
        }
    }

    /// Print `[debug]` lines for every state transition.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.trace.set_debug(debug);
        self
    }

    /// Forward structured trace events to `sink`.
    #[must_use]
    pub fn with_trace(mut self, sink: &'static dyn ZipTraceSink) -> Self {
        self.trace.set_sink(sink);
        self
    }

    // accessors

    /// Number of columns (the width of every row).
    #[must_use]
    pub const fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub const fn rows_emitted(&self) -> u64 {
        self.rows
    }

    #[must_use]
    pub const fn exhausted_count(&self) -> usize {
        self.exhausted
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.trace.is_debug()
    }

    #[must_use]
    pub fn column_states(&self) -> &[ColumnState] {
        &self.states
    }

    #[must_use]
    pub fn policies(&self) -> &[FillPolicy<T, E>] {
        &self.policies
    }

    fn finish(&mut self) {
        self.finished = true;
        self.previous = None;
        self.trace.emit(ZipTraceEvent::Finished {
            rows: self.rows,
            exhausted: self.exhausted,
            width: self.columns.len(),
        });
    }
}

impl<T, E> ZipPlus<'_, T, E>
where
    T: FillValue,
    E: Clone,
{
    /// Drain every remaining row, or return the first raised error.
    pub fn try_collect_rows(self) -> Result<Vec<Row<T>>, E> {
        self.collect()
    }

    // Resolve one step. `Ok(None)` means iteration ended cleanly.
    fn advance(&mut self) -> Result<Option<Row<T>>, E> {
        let step = self.rows;
        let width = self.columns.len();
        let mut values = Vec::with_capacity(width);

        for (column, cursor) in self.columns.iter_mut().enumerate() {
            let state = &mut self.states[column];

            if !state.is_exhausted() {
                if let Some(value) = cursor.pull() {
                    values.push(value);
                    continue;
                }

                state.mark_exhausted();
                self.exhausted += 1;
                self.trace.emit(ZipTraceEvent::ColumnExhausted {
                    step,
                    column,
                    policy: self.policies[column].kind(),
                    exhausted: self.exhausted,
                    width,
                });
            }

            let value = match &self.policies[column] {
                // stop columns end iteration on their first exhaustion, so
                // this arm is only ever reached within that same step
                FillPolicy::Stop => {
                    self.trace.emit(ZipTraceEvent::FullStop { step, column });
                    return Ok(None);
                }
                FillPolicy::Raise(err) => {
                    self.trace.emit(ZipTraceEvent::Raised { step, column });
                    return Err(err.clone());
                }
                FillPolicy::Previous => self
                    .previous
                    .as_ref()
                    .and_then(|row| row.get(column))
                    .cloned()
                    .unwrap_or_else(T::fill_null),
                FillPolicy::Constant(value) => value.clone(),
            };
            values.push(value);
        }

        if self.exhausted == width {
            return Ok(None);
        }

        self.trace.emit_row(
            ZipTraceEvent::Row {
                step,
                exhausted: self.exhausted,
                width,
            },
            &values,
        );

        Ok(Some(Row::new(values)))
    }
}

impl<T, E> Iterator for ZipPlus<'_, T, E>
where
    T: FillValue,
    E: Clone,
{
    type Item = Result<Row<T>, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.advance() {
            Ok(Some(row)) => {
                self.rows += 1;
                if self.keep_previous {
                    self.previous = Some(row.clone());
                }

                Some(Ok(row))
            }
            Ok(None) => {
                self.finish();
                None
            }
            Err(err) => Some(Err(err)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        if self.policies.iter().any(|policy| matches!(policy, FillPolicy::Raise(_))) {
            return (0, None);
        }

        // rows need at least one live column, and end with any live stop column
        let mut longest = Some(0usize);
        let mut stop_bound: Option<usize> = None;

        for ((cursor, state), policy) in self.columns.iter().zip(&self.states).zip(&self.policies)
        {
            if state.is_exhausted() {
                continue;
            }

            let (_, upper) = cursor.size_hint();
            longest = longest.zip(upper).map(|(a, b)| a.max(b));
            if policy.is_stop()
                && let Some(upper) = upper
            {
                stop_bound = Some(stop_bound.map_or(upper, |bound| bound.min(upper)));
            }
        }

        let upper = match (longest, stop_bound) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        (0, upper)
    }
}

impl<T, E> FusedIterator for ZipPlus<'_, T, E>
where
    T: FillValue,
    E: Clone,
{
}
