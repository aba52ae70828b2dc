//! Text summary shown under the calendar for the hovered day.

use crate::core::calculator::day::day_gaps;
use crate::models::coverage::CoverageGap;
use crate::models::language::Language;
use crate::models::service::ServiceWindow;
use crate::models::shift::ShiftsByGuardAndDate;
use chrono::NaiveDate;

/// `None` when no day is hovered; otherwise one line per service with gaps,
/// phrases joined with the language's "and". Gaps without a service name
/// get a line each.
pub fn get_combined_footer_gaps(
    hovered_day: Option<&NaiveDate>,
    selected_service: Option<&ServiceWindow>,
    all_services: &[ServiceWindow],
    shifts: &ShiftsByGuardAndDate,
    lang: Language,
) -> Option<Vec<String>> {
    let day = hovered_day?;

    let gaps = day_gaps(day, selected_service, all_services, shifts, lang);

    Some(combine_by_service(&gaps, lang))
}

enum FooterLine<'a> {
    Service(&'a str, Vec<&'a str>),
    Single(&'a str),
}

fn combine_by_service(gaps: &[CoverageGap], lang: Language) -> Vec<String> {
    let mut lines: Vec<FooterLine> = Vec::new();

    for gap in gaps {
        match gap.service_name.as_deref() {
            Some(name) => {
                let existing = lines.iter_mut().find_map(|line| match line {
                    FooterLine::Service(n, phrases) if *n == name => Some(phrases),
                    _ => None,
                });
                match existing {
                    Some(phrases) => phrases.push(gap.phrase.as_str()),
                    None => lines.push(FooterLine::Service(name, vec![gap.phrase.as_str()])),
                }
            }
            None => lines.push(FooterLine::Single(gap.description.as_str())),
        }
    }

    let joiner = format!(" {} ", lang.conjunction());

    lines
        .into_iter()
        .map(|line| match line {
            FooterLine::Service(name, phrases) => format!("{}: {}", name, phrases.join(&joiner)),
            FooterLine::Single(text) => text.to_string(),
        })
        .collect()
}
