use std::fmt;

use crate::error::InvalidConfiguration;
use crate::render::join_readout;
use crate::unit::CountingUnit;

use super::ClockBuilder;

/// An ordered chain of [`CountingUnit`]s behaving like a multi-digit odometer.
///
/// Units are stored least-significant first. Separators are stored in
/// rendering order: `separators[0]` sits between the two most-significant
/// units. The clock owns its units outright and holds no other state.
///
/// `tick()` and `render()` are plain synchronous calls. Callers sharing one
/// clock across threads serialize access themselves (e.g. a `Mutex`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeClock {
    units: Vec<CountingUnit>,
    separators: Vec<String>,
}

impl CascadeClock {
    /// Creates a clock from `(limit, label)` pairs and `units.len() - 1`
    /// separators.
    ///
    /// Fails with [`InvalidConfiguration`] when the unit list is empty, any
    /// limit is 0, or the separator count is wrong. No partially built clock
    /// is ever returned.
    pub fn new<L, S>(
        units: impl IntoIterator<Item = (u32, L)>,
        separators: impl IntoIterator<Item = S>,
    ) -> Result<Self, InvalidConfiguration>
    where
        L: Into<String>,
        S: Into<String>,
    {
        units
            .into_iter()
            .fold(ClockBuilder::new(), |builder, (limit, label)| builder.unit(limit, label))
            .separators(separators)
            .build()
    }

    /// Seconds (60), minutes (60) and hours (24), rendered as `HH:MM.SS`.
    pub fn hms() -> Self {
        let units = vec![
            CountingUnit::preset(60, "s"),
            CountingUnit::preset(60, "m"),
            CountingUnit::preset(24, "h"),
        ];
        Self {
            units,
            separators: vec![":".to_string(), ".".to_string()],
        }
    }

    /// Starts a [`ClockBuilder`].
    pub fn builder() -> ClockBuilder {
        ClockBuilder::new()
    }

    pub(crate) fn from_parts(
        units: Vec<CountingUnit>,
        separators: Vec<String>,
    ) -> Result<Self, InvalidConfiguration> {
        if units.is_empty() {
            return Err(InvalidConfiguration::NoUnits);
        }
        let expected = units.len() - 1;
        if separators.len() != expected {
            return Err(InvalidConfiguration::SeparatorCount {
                expected,
                found: separators.len(),
            });
        }

        log::debug!(
            "cascade clock built: limits={:?}",
            units.iter().map(CountingUnit::limit).collect::<Vec<_>>()
        );

        Ok(Self { units, separators })
    }

    /// Units, least-significant first.
    #[inline]
    pub fn units(&self) -> &[CountingUnit] {
        &self.units
    }

    #[inline]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Separators in rendering order.
    #[inline]
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Advances the least-significant unit and propagates carries.
    ///
    /// Each unit in the carry chain advances exactly once; propagation stops
    /// at the first unit that does not wrap. A wrap of the most-significant
    /// unit has no consumer and is dropped.
    pub fn tick(&mut self) {
        let mut advanced = 0;
        for unit in &mut self.units {
            advanced += 1;
            if !unit.advance() {
                break;
            }
        }
        log::trace!("tick: carry reached {advanced} of {} unit(s)", self.units.len());
    }

    /// Joined read-out, most-significant unit first. Labels are not included.
    pub fn render(&self) -> String {
        let parts: Vec<String> = self.units.iter().rev().map(CountingUnit::display_value).collect();
        join_readout(&parts, &self.separators)
    }

    /// Like [`render`](Self::render), with each unit's label appended to its value.
    pub fn render_labeled(&self) -> String {
        let parts: Vec<String> = self.units.iter().rev().map(CountingUnit::labeled_value).collect();
        join_readout(&parts, &self.separators)
    }
}

impl fmt::Display for CascadeClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
