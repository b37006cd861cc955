use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every endpoint the mock simulates. Used as the key for per-operation delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Initialize,
    Register,
    Login,
    ListStations,
    SearchTrains,
    ListTrainSeats,
    Reserve,
    CommitReservation,
    CancelReservation,
    ListReservations,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Initialize,
        Operation::Register,
        Operation::Login,
        Operation::ListStations,
        Operation::SearchTrains,
        Operation::ListTrainSeats,
        Operation::Reserve,
        Operation::CommitReservation,
        Operation::CancelReservation,
        Operation::ListReservations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Initialize => "initialize",
            Operation::Register => "register",
            Operation::Login => "login",
            Operation::ListStations => "list_stations",
            Operation::SearchTrains => "search_trains",
            Operation::ListTrainSeats => "list_train_seats",
            Operation::Reserve => "reserve",
            Operation::CommitReservation => "commit_reservation",
            Operation::CancelReservation => "cancel_reservation",
            Operation::ListReservations => "list_reservations",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
        assert_eq!(
            "teleport".parse::<Operation>(),
            Err(UnknownOperation("teleport".to_string()))
        );
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        let json = serde_json::to_string(&Operation::ListTrainSeats).unwrap();
        assert_eq!(json, "\"list_train_seats\"");
    }
}
