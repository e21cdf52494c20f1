use serde::Serialize;

use crate::sirius::{AppointmentType, AttorneyStatus, DecisionMode, LpaStoreAttorney};

/// Which side of the roster an attorney falls on for removal purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterGroup {
    Active,
    Inactive,
    Removed,
}

impl RosterGroup {
    pub fn of(attorney: &LpaStoreAttorney) -> Self {
        match (&attorney.status, &attorney.appointment_type) {
            (AttorneyStatus::Removed, _) => Self::Removed,
            (AttorneyStatus::Active, _) | (AttorneyStatus::Inactive, AppointmentType::Original) => {
                Self::Active
            }
            _ => Self::Inactive,
        }
    }
}

/// The case's attorneys split into disjoint groups, each in case order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttorneyRoster {
    pub active: Vec<LpaStoreAttorney>,
    pub inactive: Vec<LpaStoreAttorney>,
    pub removed: Vec<LpaStoreAttorney>,
}

impl AttorneyRoster {
    pub fn partition(attorneys: &[LpaStoreAttorney]) -> Self {
        let mut roster = Self::default();
        for attorney in attorneys {
            let group = match RosterGroup::of(attorney) {
                RosterGroup::Active => &mut roster.active,
                RosterGroup::Inactive => &mut roster.inactive,
                RosterGroup::Removed => &mut roster.removed,
            };
            group.push(attorney.clone());
        }
        roster
    }

    pub fn find_active(&self, uid: &str) -> Option<&LpaStoreAttorney> {
        self.active.iter().find(|attorney| attorney.uid == uid)
    }

    /// Attorneys whose status is literally `active`.
    pub fn active_status_count(&self) -> usize {
        self.active
            .iter()
            .filter(|attorney| attorney.status == AttorneyStatus::Active)
            .count()
    }

    pub fn dormant_replacement_count(&self) -> usize {
        self.inactive
            .iter()
            .filter(|attorney| attorney.is_dormant_replacement())
            .count()
    }

    /// Replacements inherit the attorneys' decision mode when several of each exist and the LPA
    /// never stated one for the replacements.
    pub fn effective_replacement_decisions(
        &self,
        decisions: &DecisionMode,
        replacement_decisions: &DecisionMode,
    ) -> DecisionMode {
        if self.active_status_count() > 1
            && self.dormant_replacement_count() > 1
            && replacement_decisions.is_unspecified()
        {
            decisions.clone()
        } else {
            replacement_decisions.clone()
        }
    }
}
