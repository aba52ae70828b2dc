//! Month grid with highlighted days.

use crate::core::logic::DayCoverage;
use crate::utils::date::{month_name, weekday_short};
use ansi_term::Colour;
use chrono::{Datelike, NaiveDate, Weekday};

const CELL_WIDTH: usize = 4;

pub struct CalendarLogic;

impl CalendarLogic {
    /// Render one month. Highlighted days carry a `*` marker and, when
    /// `color` is on, a red background.
    pub fn render_month(year: i32, month: u32, coverage: &[DayCoverage], color: bool) -> String {
        let mut out = String::new();

        let title = format!("{} {}", month_name(month), year);
        out.push_str(&format!("{:^width$}\n", title, width = CELL_WIDTH * 7));

        let week = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        for wd in week {
            out.push_str(&format!("{:>3} ", weekday_short(wd)));
        }
        out.push('\n');

        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return out;
        };

        let offset = first.weekday().num_days_from_monday() as usize;
        out.push_str(&" ".repeat(offset * CELL_WIDTH));

        let mut column = offset;
        for day in first.iter_days().take_while(|d| d.month() == month) {
            let highlighted = coverage
                .iter()
                .any(|c| c.date == day && c.info.should_highlight);

            out.push_str(&Self::cell(day.day(), highlighted, color));

            column += 1;
            if column == 7 {
                out.push('\n');
                column = 0;
            }
        }

        if column != 0 {
            out.push('\n');
        }

        out
    }

    fn cell(day: u32, highlighted: bool, color: bool) -> String {
        if !highlighted {
            return format!("{:>3} ", day);
        }

        let text = format!("{:>2}*", day);
        if color {
            format!("{} ", Colour::White.on(Colour::Red).bold().paint(text))
        } else {
            format!("{} ", text)
        }
    }

    /// Distinct (year, month) pairs of a period, in order.
    pub fn months_of(dates: &[NaiveDate]) -> Vec<(i32, u32)> {
        let mut months: Vec<(i32, u32)> = Vec::new();
        for d in dates {
            let ym = (d.year(), d.month());
            if months.last() != Some(&ym) {
                months.push(ym);
            }
        }
        months
    }
}
