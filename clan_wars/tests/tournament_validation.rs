//! Integration tests for championship structure validation
//!
//! Each phase must hand the next one exactly the players it expects, and the
//! prize tiers must cover places contiguously without exceeding the pool.

#[cfg(test)]
mod validation_tests {
    use clan_wars::tournament::{PrizeTier, TournamentError, TournamentStructure};

    #[test]
    fn test_championship_literals() {
        let structure = TournamentStructure::championship();

        assert_eq!(structure.qualification.regions.len(), 3);
        assert_eq!(structure.qualification.players_per_region, 64);
        assert_eq!(structure.group_stage.groups, 12);
        assert_eq!(structure.group_stage.players_per_group, 4);
        assert_eq!(structure.playoffs.rounds.len(), 5);
        assert_eq!(structure.prize_pool.total, 1_000_000);

        let amounts: Vec<i64> = structure.prize_pool.tiers.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![250_000, 150_000, 75_000, 50_000, 25_000]);
    }

    #[test]
    fn test_no_regions() {
        let mut structure = TournamentStructure::championship();
        structure.qualification.regions.clear();
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::NoRegions)
        ));
    }

    #[test]
    fn test_too_many_qualifiers() {
        let mut structure = TournamentStructure::championship();
        structure.qualification.players_per_region = 8;
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::TooManyQualifiers {
                qualifiers: 16,
                players: 8
            })
        ));
    }

    #[test]
    fn test_qualifier_mismatch() {
        let mut structure = TournamentStructure::championship();
        structure.qualification.qualifiers_per_region = 12;
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::QualifierMismatch {
                qualified: 36,
                expected: 48
            })
        ));
    }

    #[test]
    fn test_group_size_mismatch() {
        let mut structure = TournamentStructure::championship();
        structure.group_stage.players_per_group = 5;
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::GroupSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_advancement_mismatch() {
        let mut structure = TournamentStructure::championship();
        structure.group_stage.advancement = 3;
        let err = structure.validate().unwrap_err();
        assert!(matches!(
            err,
            TournamentError::AdvancementMismatch {
                advancing: 36,
                expected: 24
            }
        ));
        assert_eq!(
            err.to_string(),
            "Group stage advances 36 players but the playoffs expect 24"
        );
    }

    #[test]
    fn test_too_many_advancing() {
        let mut structure = TournamentStructure::championship();
        structure.group_stage.advancement = 5;
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::TooManyAdvancing { .. })
        ));
    }

    #[test]
    fn test_no_playoff_rounds() {
        let mut structure = TournamentStructure::championship();
        structure.playoffs.rounds.clear();
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::NoPlayoffRounds)
        ));
    }

    #[test]
    fn test_playoff_field_mismatch() {
        let mut structure = TournamentStructure::championship();
        // Four rounds would need 9-16 players in the opening round
        structure.playoffs.rounds.remove(0);
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::PlayoffFieldMismatch {
                players: 24,
                rounds: 4
            })
        ));
    }

    #[test]
    fn test_tier_gap() {
        let mut structure = TournamentStructure::championship();
        structure.prize_pool.tiers.remove(2);
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::TierGap {
                expected: 3,
                found: 5
            })
        ));
    }

    #[test]
    fn test_invalid_tier() {
        let mut structure = TournamentStructure::championship();
        structure.prize_pool.tiers[0] = PrizeTier::new(0, 1, 250_000);
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::InvalidTier { first: 0, last: 1 })
        ));
    }

    #[test]
    fn test_negative_amount() {
        let mut structure = TournamentStructure::championship();
        structure.prize_pool.tiers[4].amount = -1;
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::InvalidAmount(-1))
        ));
    }

    #[test]
    fn test_prize_overflow() {
        let mut structure = TournamentStructure::championship();
        structure.prize_pool.total = 900_000;
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::PrizeOverflow {
                distributed: 950_000,
                total: 900_000
            })
        ));
    }

    #[test]
    fn test_group_seat_overflow() {
        let mut structure = TournamentStructure::championship();
        structure.group_stage.groups = usize::MAX;
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::Overflow("group seats"))
        ));
    }

    #[test]
    fn test_qualifier_overflow() {
        let mut structure = TournamentStructure::championship();
        structure.qualification.players_per_region = usize::MAX;
        structure.qualification.qualifiers_per_region = usize::MAX;
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::Overflow("qualified players"))
        ));
    }

    #[test]
    fn test_prize_place_overflow() {
        let mut structure = TournamentStructure::championship();
        structure.prize_pool.tiers = vec![PrizeTier::new(1, usize::MAX, 1)];
        assert!(matches!(
            structure.validate(),
            Err(TournamentError::Overflow("prize places"))
        ));
    }

    #[test]
    fn test_payout_overflow_from_json() {
        let mut structure = TournamentStructure::championship();
        structure.prize_pool.tiers[4].amount = i64::MAX / 4;
        let json = structure.to_json().unwrap();

        let loaded = TournamentStructure::from_json(&json).unwrap();
        assert_eq!(loaded.prize_pool.distributed(), None);
        assert!(matches!(
            loaded.validate(),
            Err(TournamentError::Overflow("prize payouts"))
        ));
    }

    #[test]
    fn test_json_form_loads_and_validates() {
        let json = TournamentStructure::championship().to_json().unwrap();
        let structure = TournamentStructure::from_json(&json).unwrap();
        assert!(structure.validate().is_ok());
    }
}
