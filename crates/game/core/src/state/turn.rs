use super::Team;

/// Turn-scoped action point pool of the team currently playing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Team whose units may act.
    pub team: Team,

    /// Action points left this turn.
    pub act_points: u32,

    /// Turn counter, starting at 1.
    pub number: u32,
}

impl TurnState {
    pub fn new(team: Team, act_points: u32) -> Self {
        Self {
            team,
            act_points,
            number: 1,
        }
    }

    #[inline]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.act_points >= cost
    }

    /// Deducts `cost` and returns the remaining points.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InsufficientActPoints`] without deducting anything
    /// when the pool is too small.
    pub fn spend(&mut self, cost: u32) -> Result<u32, TurnError> {
        if !self.can_afford(cost) {
            return Err(TurnError::InsufficientActPoints {
                required: cost,
                available: self.act_points,
            });
        }
        self.act_points -= cost;
        Ok(self.act_points)
    }

    /// Returns `cost` points taken by [`TurnState::spend`] to the pool.
    pub fn refund(&mut self, cost: u32) {
        self.act_points = self.act_points.saturating_add(cost);
    }

    /// Hands the turn to `team` with a fresh pool.
    pub fn advance(&mut self, team: Team, act_points: u32) {
        self.team = team;
        self.act_points = act_points;
        self.number += 1;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(Team::Ally, 0)
    }
}

/// Errors raised by action point accounting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("insufficient action points: required {required}, available {available}")]
    InsufficientActPoints { required: u32, available: u32 },
}

impl crate::error::GameError for TurnError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::InsufficientActPoints { .. } => "TURN_INSUFFICIENT_ACT_POINTS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_deducts_points() {
        let mut turn = TurnState::new(Team::Ally, 3);
        assert_eq!(turn.spend(2), Ok(1));
        assert_eq!(turn.act_points, 1);
    }

    #[test]
    fn overspending_leaves_pool_untouched() {
        let mut turn = TurnState::new(Team::Ally, 1);
        assert_eq!(
            turn.spend(2),
            Err(TurnError::InsufficientActPoints {
                required: 2,
                available: 1
            })
        );
        assert_eq!(turn.act_points, 1);
    }

    #[test]
    fn refund_restores_spent_points() {
        let mut turn = TurnState::new(Team::Ally, 2);
        turn.spend(2).unwrap();
        turn.refund(2);
        assert_eq!(turn.act_points, 2);
    }

    #[test]
    fn advance_switches_team_and_refills() {
        let mut turn = TurnState::new(Team::Ally, 0);
        turn.advance(Team::Enemy, 3);
        assert_eq!(turn.team, Team::Enemy);
        assert_eq!(turn.act_points, 3);
        assert_eq!(turn.number, 2);
    }
}
