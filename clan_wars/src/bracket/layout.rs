//! Fixed composition of the championship bracket.
//!
//! Positions are literal data-space coordinates; nothing is auto-laid out.
//! The tournament structure only supplies names, counts and prize amounts.

use super::config::Theme;
use super::errors::BracketResult;
use super::models::{
    AxisRange, Bracket, Color, Connector, Label, LabelLine, LegendEntry, Phase, PhaseKind, Point,
    Rect,
};
use crate::tournament::{
    Playoffs, PrizePool, TournamentStructure, format_amount, format_amount_short,
};

pub const X_RANGE: AxisRange = AxisRange::new(-1.0, 20.0);
pub const Y_RANGE: AxisRange = AxisRange::new(1.0, 12.0);

pub const BOX_WIDTH: f64 = 3.5;
pub const BOX_HEIGHT: f64 = 1.5;
pub const FINALS_WIDTH: f64 = 4.5;

const REGION_ORIGIN: Point = Point::new(0.0, 10.0);
const REGION_SPACING: f64 = 4.0;
const GROUP_STAGE_RECT: Rect = Rect::new(4.0, 8.0, 4.0, 1.5);
const PLAYOFF_ORIGIN: Point = Point::new(2.0, 6.0);
const PLAYOFF_SPACING: f64 = 3.0;
const PRIZE_POOL_RECT: Rect = Rect::new(7.0, 3.5, 4.0, 1.5);
const LEGEND_ORIGIN: Point = Point::new(1.0, 2.0);
const LEGEND_SPACING: f64 = 3.0;
const SWATCH_WIDTH: f64 = 0.5;
const SWATCH_HEIGHT: f64 = 0.3;

const BORDER_WIDTH: f64 = 2.0;
const PRIZE_BORDER_WIDTH: f64 = 3.0;
const ARROW_WIDTH: f64 = 3.0;

const REGION_COLOR: usize = 0;
const PRIZE_COLOR: usize = 1;
const GROUP_STAGE_COLOR: usize = 2;
const PLAYOFF_LEGEND_COLOR: usize = 3;

pub const GROUP_STAGE: &str = "Group Stage";
pub const PRIZE_POOL: &str = "Prize Pool";

impl Bracket {
    /// Bracket for the Ninja Clan Wars Championship with the default theme
    pub fn championship() -> BracketResult<Self> {
        Self::from_structure(&TournamentStructure::championship(), &Theme::default())
    }

    /// Compose the bracket scene for a tournament structure
    ///
    /// # Errors
    ///
    /// Fails when the structure does not validate.
    pub fn from_structure(structure: &TournamentStructure, theme: &Theme) -> BracketResult<Self> {
        structure.validate()?;

        let mut phases = Vec::new();
        let mut connectors = Vec::new();

        let regions = region_phases(structure, theme);
        let group_stage = group_stage_phase(structure, theme);
        let rounds = playoff_phases(&structure.playoffs, &structure.prize_pool, theme);
        let prize_pool = prize_pool_phase(&structure.prize_pool, theme);

        for region in &regions {
            connectors.push(arrow(
                region,
                region.rect.bottom_center(),
                &group_stage,
                group_stage.rect.top_center(),
                theme.line,
            ));
        }

        if let Some(first) = rounds.first() {
            connectors.push(arrow(
                &group_stage,
                group_stage.rect.bottom_center(),
                first,
                first.rect.top_center(),
                theme.line,
            ));
        }

        for pair in rounds.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            connectors.push(arrow(
                from,
                from.rect.right_middle(),
                to,
                Point::new(to.rect.left(), from.rect.center().y),
                theme.line,
            ));
        }

        if let Some(finals) = rounds.last() {
            connectors.push(arrow(
                &prize_pool,
                prize_pool.rect.right_middle(),
                finals,
                finals.rect.bottom_left(),
                prize_pool.fill,
            ));
        }

        phases.extend(regions);
        phases.push(group_stage);
        phases.extend(rounds);
        phases.push(prize_pool);

        log::debug!(
            "Composed bracket with {} phases and {} connectors",
            phases.len(),
            connectors.len()
        );

        Ok(Self {
            title: structure.name.clone(),
            subtitle: "Tournament Structure & Prize Distribution".to_string(),
            x_range: X_RANGE,
            y_range: Y_RANGE,
            phases,
            connectors,
            legend: legend(theme),
        })
    }
}

fn region_phases(structure: &TournamentStructure, theme: &Theme) -> Vec<Phase> {
    let qualification = &structure.qualification;
    qualification
        .regions
        .iter()
        .enumerate()
        .map(|(i, region)| Phase {
            name: region.clone(),
            kind: PhaseKind::Region,
            rect: Rect::new(
                REGION_ORIGIN.x + i as f64 * REGION_SPACING,
                REGION_ORIGIN.y,
                BOX_WIDTH,
                BOX_HEIGHT,
            ),
            fill: theme.color(REGION_COLOR),
            border_width: BORDER_WIDTH,
            label: Label::new(
                vec![
                    LabelLine::bold(region.as_str()),
                    LabelLine::plain(format!("{} Players", qualification.players_per_region)),
                    LabelLine::plain(format!("→ Top {}", qualification.qualifiers_per_region)),
                ],
                12.0,
            ),
        })
        .collect()
}

fn group_stage_phase(structure: &TournamentStructure, theme: &Theme) -> Phase {
    let groups = &structure.group_stage;
    Phase {
        name: GROUP_STAGE.to_string(),
        kind: PhaseKind::GroupStage,
        rect: GROUP_STAGE_RECT,
        fill: theme.color(GROUP_STAGE_COLOR),
        border_width: BORDER_WIDTH,
        label: Label::new(
            vec![
                LabelLine::bold(GROUP_STAGE),
                LabelLine::plain(format!(
                    "{} Players, {} Groups of {}",
                    groups.total_players, groups.groups, groups.players_per_group
                )),
                LabelLine::plain(format!("{} Format", groups.format)),
                LabelLine::plain(format!("Top {} from each → Playoffs", groups.advancement)),
            ],
            12.0,
        ),
    }
}

fn playoff_phases(playoffs: &Playoffs, pool: &PrizePool, theme: &Theme) -> Vec<Phase> {
    let counts = playoffs.round_player_counts();
    let last = playoffs.rounds.len().saturating_sub(1);

    playoffs
        .rounds
        .iter()
        .zip(counts)
        .enumerate()
        .map(|(i, (name, players))| {
            let width = if i == last { FINALS_WIDTH } else { BOX_WIDTH };
            let mut lines = vec![
                LabelLine::bold(name.as_str()),
                LabelLine::plain(format!("{players} Players")),
            ];
            let note = if i == last {
                final_prize_note(pool)
            } else {
                round_prize_note(players, pool)
            };
            lines.extend(note.map(LabelLine::plain));

            Phase {
                name: name.clone(),
                kind: PhaseKind::PlayoffRound,
                rect: Rect::new(
                    PLAYOFF_ORIGIN.x + i as f64 * PLAYOFF_SPACING,
                    PLAYOFF_ORIGIN.y,
                    width,
                    BOX_HEIGHT,
                ),
                fill: theme.color(i + 1),
                border_width: BORDER_WIDTH,
                label: Label::new(lines, 11.0),
            }
        })
        .collect()
}

/// Prize note for a round contested by `players`.
///
/// Shows the tier paying the places decided by losing this round. A round
/// whose losers finish out of the money shows the lowest paid tier instead.
pub fn round_prize_note(players: usize, pool: &PrizePool) -> Option<String> {
    let tier = pool
        .tier_covering(players / 2 + 1, players)
        .or_else(|| pool.lowest_tier())?;
    Some(format!(
        "{} ({})",
        format_amount_short(tier.amount),
        tier.place_label()
    ))
}

/// Prize note for the deciding round: winner and runner-up payouts
pub fn final_prize_note(pool: &PrizePool) -> Option<String> {
    let winner = pool.payout_for_place(1)?;
    let note = match pool.payout_for_place(2) {
        Some(runner_up) => format!(
            "Winner: {} | Runner-up: {}",
            format_amount_short(winner),
            format_amount_short(runner_up)
        ),
        None => format!("Winner: {}", format_amount_short(winner)),
    };
    Some(note)
}

fn prize_pool_phase(pool: &PrizePool, theme: &Theme) -> Phase {
    Phase {
        name: PRIZE_POOL.to_string(),
        kind: PhaseKind::PrizePool,
        rect: PRIZE_POOL_RECT,
        fill: theme.color(PRIZE_COLOR),
        border_width: PRIZE_BORDER_WIDTH,
        label: Label::new(
            vec![
                LabelLine::bold("TOTAL PRIZE POOL"),
                LabelLine::bold(format!("{} USD", format_amount(pool.total))),
            ],
            14.0,
        )
        .with_font_family("Arial Black"),
    }
}

fn arrow(from: &Phase, start: Point, to: &Phase, end: Point, color: Color) -> Connector {
    Connector {
        source: from.name.clone(),
        target: to.name.clone(),
        from: start,
        to: end,
        color,
        width: ARROW_WIDTH,
    }
}

fn legend(theme: &Theme) -> Vec<LegendEntry> {
    [
        ("Regional Qualifiers", REGION_COLOR),
        ("Group Stage", GROUP_STAGE_COLOR),
        ("Playoffs", PLAYOFF_LEGEND_COLOR),
        ("Prize Pool", PRIZE_COLOR),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (text, color))| LegendEntry {
        swatch: Rect::new(
            LEGEND_ORIGIN.x + i as f64 * LEGEND_SPACING,
            LEGEND_ORIGIN.y,
            SWATCH_WIDTH,
            SWATCH_HEIGHT,
        ),
        color: theme.color(color),
        text: text.to_string(),
        font_size: 10.0,
    })
    .collect()
}
