//! Interactive dimensioning session.
//!
//! The session owns one parameter set per network type and the results of the
//! selected one. Every mutation recomputes the results in full and then calls
//! the subscribed observers, in subscription order, exactly once.

use crate::error::RunnerResult;
use netdim_core::{
    breakdown, compute_with_constants, Breakdown, DimensioningConstants, NetworkType,
    ParameterDef, ParameterSet, ResultSet,
};
use netdim_report::{ReportMetadata, Snapshot};
use std::fmt;
use tracing::{debug, trace, warn};

/// What caused a recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Another network type was selected.
    Select,
    /// A parameter of the selected network changed.
    Parameter(&'static str),
    /// A whole parameter set was replaced (project load, snapshot import).
    Replace,
    /// The selected network went back to its startup values.
    Reset,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Select => write!(f, "select"),
            Trigger::Parameter(name) => write!(f, "set {}", name),
            Trigger::Replace => write!(f, "replace"),
            Trigger::Reset => write!(f, "reset"),
        }
    }
}

/// Notification sent to observers after each recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recomputation {
    /// Network the results belong to.
    pub network: NetworkType,
    /// Parameters the results were computed from.
    pub parameters: ParameterSet,
    /// Fresh results.
    pub results: ResultSet,
    /// Mutation that caused the recomputation.
    pub trigger: Trigger,
}

/// Callback invoked after every recomputation.
pub type Observer = Box<dyn FnMut(&Recomputation)>;

/// Parameter sets, the selected network and its current results.
pub struct Session {
    network: NetworkType,
    parameters: [ParameterSet; 5],
    startup: [ParameterSet; 5],
    constants: DimensioningConstants,
    results: ResultSet,
    observers: Vec<Observer>,
}

fn slot(network: NetworkType) -> usize {
    match network {
        NetworkType::Gsm => 0,
        NetworkType::Umts => 1,
        NetworkType::Lte => 2,
        NetworkType::Microwave => 3,
        NetworkType::Optical => 4,
    }
}

impl Session {
    /// Session on GSM with default parameters and constants.
    pub fn new() -> Self {
        Self::with_startup(
            NetworkType::Gsm,
            std::iter::empty::<ParameterSet>(),
            DimensioningConstants::default(),
        )
    }

    /// Session with custom startup parameters. Networks missing from
    /// `startup` start from their defaults.
    pub fn with_startup(
        network: NetworkType,
        startup: impl IntoIterator<Item = ParameterSet>,
        constants: DimensioningConstants,
    ) -> Self {
        let mut sets = NetworkType::ALL.map(ParameterSet::defaults);
        for params in startup {
            sets[slot(params.network())] = params;
        }
        let results = compute_with_constants(&sets[slot(network)], &constants);
        Self {
            network,
            parameters: sets,
            startup: sets,
            constants,
            results,
            observers: Vec::new(),
        }
    }

    /// Selected network type.
    pub fn network(&self) -> NetworkType {
        self.network
    }

    /// Parameters of the selected network.
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters[slot(self.network)]
    }

    /// Parameters of any network, selected or not.
    pub fn parameters_for(&self, network: NetworkType) -> &ParameterSet {
        &self.parameters[slot(network)]
    }

    /// Results of the selected network.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Planning constants in use.
    pub fn constants(&self) -> &DimensioningConstants {
        &self.constants
    }

    /// Intermediate quantities behind the current results.
    pub fn breakdown(&self) -> Breakdown {
        breakdown(self.parameters(), &self.constants)
    }

    /// Snapshot of the current parameters and results.
    pub fn snapshot(&self, metadata: &ReportMetadata) -> Snapshot {
        Snapshot::new(*self.parameters(), self.results, metadata.clone())
    }

    /// Register an observer.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Recomputation) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Switch to another network type.
    pub fn select(&mut self, network: NetworkType) -> &ResultSet {
        self.network = network;
        self.recompute(Trigger::Select)
    }

    /// Set a parameter from user-entered text; non-numeric text reads as zero.
    pub fn set_param(&mut self, name: &str, raw: &str) -> RunnerResult<&ResultSet> {
        let def = self.parameters[slot(self.network)].set_raw(name, raw)?;
        Ok(self.after_set(def))
    }

    /// Set a parameter to a number.
    pub fn set_value(&mut self, name: &str, value: f64) -> RunnerResult<&ResultSet> {
        let def = self.parameters[slot(self.network)].set(name, value)?;
        Ok(self.after_set(def))
    }

    /// Apply a `name=value` assignment to the selected network.
    pub fn apply_assignment(&mut self, assignment: &str) -> RunnerResult<&ResultSet> {
        let def = self.parameters[slot(self.network)].apply_assignment(assignment)?;
        Ok(self.after_set(def))
    }

    /// Replace the parameters of a network and select it.
    pub fn replace_parameters(&mut self, parameters: ParameterSet) -> &ResultSet {
        self.network = parameters.network();
        self.parameters[slot(self.network)] = parameters;
        self.recompute(Trigger::Replace)
    }

    /// Restore the selected network's startup parameters.
    pub fn reset(&mut self) -> &ResultSet {
        let index = slot(self.network);
        self.parameters[index] = self.startup[index];
        self.recompute(Trigger::Reset)
    }

    fn after_set(&mut self, def: &'static ParameterDef) -> &ResultSet {
        let value = self.parameters().get(def.name).unwrap_or(f64::NAN);
        if !def.is_within_bounds(value) {
            let range = def.range_label().unwrap_or_default();
            warn!(
                network = %self.network,
                parameter = def.name,
                value,
                range = %range,
                "value outside the suggested range"
            );
        }
        self.recompute(Trigger::Parameter(def.name))
    }

    fn recompute(&mut self, trigger: Trigger) -> &ResultSet {
        let parameters = *self.parameters();
        self.results = compute_with_constants(&parameters, &self.constants);
        debug!(
            network = %self.network,
            %trigger,
            sites = self.results.sites,
            capacity = %self.results.capacity,
            coverage = self.results.coverage,
            cost = self.results.cost,
            "recomputed"
        );

        let event = Recomputation {
            network: self.network,
            parameters,
            results: self.results,
            trigger,
        };
        for (i, observer) in self.observers.iter_mut().enumerate() {
            trace!(observer = i, "notifying observer");
            observer(&event);
        }
        &self.results
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("network", &self.network)
            .field("parameters", self.parameters())
            .field("results", &self.results)
            .field("observers", &self.observers.len())
            .finish()
    }
}
