/// Property-based tests for prize formatting and bracket composition using proptest
///
/// These tests verify that amount formatting, playoff round sizing and the
/// derived bracket labels hold across a wide range of generated championships.
use clan_wars::bracket::{Bracket, PhaseKind, Theme};
use clan_wars::tournament::{
    GroupStage, Playoffs, PrizePool, PrizeTier, Qualification, TournamentStructure,
    format_amount, format_amount_short,
};
use proptest::prelude::*;

// Strategy to generate a consistent championship: regions × qualifiers fill
// the groups, and the groups' advancers form a valid opening playoff round.
fn structure_strategy() -> impl Strategy<Value = TournamentStructure> {
    (1usize..=3, 1usize..=4, 2usize..=6).prop_flat_map(|(regions, advancement, rounds)| {
        let next_round = 1usize << (rounds - 1);
        // Opening field must satisfy next_round < field <= 2 * next_round
        let field_range = (next_round + 1)..=(next_round * 2);
        (Just(regions), Just(advancement), Just(rounds), field_range)
    })
    .prop_filter(
        "playoff field must split evenly into groups",
        |(_, advancement, _, field)| field % advancement == 0,
    )
    .prop_map(|(regions, advancement, rounds, field)| {
        let groups = field / advancement;
        let players_per_group = advancement * 2;
        let group_players = groups * players_per_group;
        // Qualifiers must divide evenly between regions
        let regions = if group_players % regions == 0 { regions } else { 1 };
        let qualifiers = group_players / regions;

        TournamentStructure {
            name: "Generated Championship".to_string(),
            qualification: Qualification {
                regions: (0..regions).map(|i| format!("Region {i}")).collect(),
                players_per_region: qualifiers * 4,
                qualifiers_per_region: qualifiers,
            },
            group_stage: GroupStage {
                total_players: group_players,
                groups,
                players_per_group,
                format: "Round Robin".to_string(),
                advancement,
            },
            playoffs: Playoffs {
                total_players: field,
                format: "Single Elimination".to_string(),
                rounds: (0..rounds).map(|i| format!("Round {}", i + 1)).collect(),
            },
            prize_pool: PrizePool {
                total: 100_000,
                tiers: vec![
                    PrizeTier::single(1, 50_000),
                    PrizeTier::single(2, 30_000),
                    PrizeTier::new(3, 4, 10_000),
                ],
            },
        }
    })
}

proptest! {
    #[test]
    fn test_format_amount_preserves_digits(amount in 0i64..10_000_000_000) {
        let formatted = format_amount(amount);
        prop_assert!(formatted.starts_with('$'));

        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits.parse::<i64>().unwrap(), amount);
    }

    #[test]
    fn test_format_amount_groups_by_three(amount in 0i64..10_000_000_000) {
        let formatted = format_amount(amount);
        let groups: Vec<&str> = formatted.trim_start_matches('$').split(',').collect();

        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn test_short_amount_for_whole_thousands(thousands in 1i64..1_000) {
        prop_assert_eq!(format_amount_short(thousands * 1_000), format!("${thousands}k"));
    }

    #[test]
    fn test_round_counts_halve_to_final(structure in structure_strategy()) {
        let counts = structure.playoffs.round_player_counts();

        prop_assert_eq!(counts.len(), structure.playoffs.rounds.len());
        prop_assert_eq!(counts[0], structure.playoffs.total_players);
        prop_assert_eq!(*counts.last().unwrap(), 2);
        for pair in counts[1..].windows(2) {
            prop_assert_eq!(pair[0], pair[1] * 2);
        }
    }

    #[test]
    fn test_generated_structures_validate(structure in structure_strategy()) {
        prop_assert!(structure.validate().is_ok(), "{:?}", structure.validate());
    }

    #[test]
    fn test_bracket_connectors_follow_structure(structure in structure_strategy()) {
        let bracket = Bracket::from_structure(&structure, &Theme::default()).unwrap();
        let regions = structure.qualification.regions.len();
        let rounds = structure.playoffs.rounds.len();

        prop_assert_eq!(bracket.connectors.len(), regions + 1 + (rounds - 1) + 1);
        prop_assert!(bracket.check_connectors().is_ok());

        let xs: Vec<f64> = bracket
            .phases_of(PhaseKind::PlayoffRound)
            .map(|p| p.rect.x)
            .collect();
        prop_assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_bracket_labels_show_player_counts(structure in structure_strategy()) {
        let bracket = Bracket::from_structure(&structure, &Theme::default()).unwrap();
        let counts = structure.playoffs.round_player_counts();

        for (phase, players) in bracket.phases_of(PhaseKind::PlayoffRound).zip(counts) {
            let expected = format!("{players} Players");
            prop_assert_eq!(phase.label.line_texts()[1], expected.as_str());
        }
    }
}
