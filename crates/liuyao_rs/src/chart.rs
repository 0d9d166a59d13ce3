//! Plain-text chart of a reading, top line first.

use liuyao_base::Polarity;
use liuyao_reading::{AnnotatedLine, Reading};

const YANG_BAR: &str = "━━━━━";
const YIN_BAR: &str = "━━ ━━";

/// Render a reading as a fixed-layout text chart.
pub fn format_chart(reading: &Reading) -> String {
    let p = &reading.pillars;
    let mut out = vec![
        format!(
            "{} ({} {})  之  {} ({})",
            reading.original.name(),
            reading.palace.label(),
            reading.palace.generation.name(),
            reading.transformed.name(),
            reading.transformed_palace.label(),
        ),
        format!(
            "{} {}時({})  {}年 {}月 {}日 {}時  節氣 {}  空亡 {}",
            reading.date,
            reading.hour_slot.branch().name(),
            reading.hour_slot.window(),
            p.year,
            p.month,
            p.day,
            p.hour,
            p.solar_term.name(),
            p.void.map(|b| b.name()).concat(),
        ),
    ];
    if let (Some(topic), Some(relative)) = (reading.topic, reading.useful_spirit) {
        out.push(format!("問 {}  用神 {}", topic.name(), relative.name()));
    }
    out.push(String::new());
    out.extend(reading.lines_top_down().map(chart_row));
    out.push(String::new());
    out.push(format!("卦辭：{}", reading.original.text.judgment));
    if !reading.moving_line_text.is_empty() {
        out.push(format!("爻辭：{}", reading.moving_line_text));
    }
    out.join("\n")
}

fn chart_row(line: &AnnotatedLine) -> String {
    let bar = match line.polarity {
        Polarity::Yang => YANG_BAR,
        Polarity::Yin => YIN_BAR,
    };
    // 老陽 O, 老陰 X
    let motion = match (line.is_moving, line.polarity) {
        (false, _) => ' ',
        (true, Polarity::Yang) => 'O',
        (true, Polarity::Yin) => 'X',
    };
    let mut markers = line.markers();
    if line.is_useful_spirit {
        markers.push('用');
    }
    let mut row = format!(
        "{} {} {} {}{} {} {} {}",
        line.position.label(),
        line.beast.name(),
        line.relative.name(),
        line.branch.name(),
        line.element.name(),
        bar,
        motion,
        markers
    );
    if let Some(c) = &line.changed {
        row = format!(
            "{}  → {} {}{}",
            row.trim_end(),
            c.relative.name(),
            c.branch.name(),
            c.element.name()
        );
    }
    row.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use liuyao_base::HourSlot;
    use liuyao_reading::{ReadingConfig, Topic, compute_reading};

    fn reading() -> Reading {
        compute_reading(
            6,
            4,
            14,
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            HourSlot::new(4).unwrap(),
            Some(Topic::Wealth),
            &ReadingConfig::default(),
        )
    }

    #[test]
    fn header_and_rows() {
        let chart = format_chart(&reading());
        let rows: Vec<&str> = chart.lines().collect();
        assert_eq!(rows[0], "水雷屯 (坎宮 二世)  之  水澤節 (坎宮)");
        assert!(rows[1].starts_with("2024-02-10 辰時(07-09)  甲辰年 丙卯月 甲辰日 戊辰時"));
        assert!(rows[1].ends_with("空亡 寅卯"));
        assert_eq!(rows[2], "問 財運  用神 妻財");
        assert_eq!(rows[4], "上爻 玄武 兄弟 子水 ━━ ━━");
        assert_eq!(rows[8], "二爻 朱雀 子孫 寅木 ━━ ━━ X 世空  → 子孫 卯木");
        assert_eq!(rows[9], "初爻 青龍 兄弟 子水 ━━━━━");
    }

    #[test]
    fn exactly_one_moving_row() {
        let chart = format_chart(&reading());
        assert_eq!(chart.lines().filter(|l| l.contains('→')).count(), 1);
    }
}
