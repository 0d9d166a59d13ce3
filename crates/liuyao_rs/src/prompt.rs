//! Consultation prompt: a reading serialized as natural-language text.
//!
//! The output is a pure function of the reading and the question. How the
//! text is displayed or sent anywhere is up to the caller.

use liuyao_reading::{AnnotatedLine, Reading};

/// Rendered when no question was given.
pub const NO_QUESTION: &str = "（未填寫，請綜觀推斷）";

const CLOSING: &str = "請依據《文王課》六爻法與《梅花易數》綜合解盤：
1. **目前現況**：本卦象說明，參照卦象開題說明。
2. **吉凶判斷**：以世爻為核心，分析動爻對世爻的作用（生剋沖合）。
3. **動變分析**：特別注意「回頭生/剋」以及「變爻刑沖合害」的影響。
4. **空亡分析**：注意空亡地支對爻象的影響，空亡之爻力量減弱。
5. **動變後分析**：未來可能狀況。
6. **具體建議**：針對問事給予指引。";

/// Serialize a reading into the consultation prompt.
pub fn format_prompt(reading: &Reading, question: Option<&str>) -> String {
    let p = &reading.pillars;
    let question = question.map(str::trim).filter(|q| !q.is_empty());
    let void = p.void.map(|b| b.name()).join("、");

    let mut out = vec![
        "道長您好，弟子請教。".to_string(),
        String::new(),
        format!("【問事】：{}", question.unwrap_or(NO_QUESTION)),
        format!(
            "【時間】：{}年 {}月 {}日 {}時",
            p.year, p.month, p.day, p.hour
        ),
        format!("【四柱】：{} / {} / {} / {}", p.year, p.month, p.day, p.hour),
        format!("【日干】：{} (需參看日建沖合)", p.day.stem.name()),
        format!("【空亡】：{void}"),
    ];
    if let (Some(topic), Some(relative)) = (reading.topic, reading.useful_spirit) {
        out.push(format!("【用神】：{} 取 {}", topic.name(), relative.name()));
    }

    out.push(String::new());
    out.push(format!(
        "【卦象】：{} 之 {}",
        reading.original.name(),
        reading.transformed.name()
    ));
    out.push(format!(
        "【宮位】：{}宮{}行",
        reading.palace.palace.name(),
        reading.palace.element.name()
    ));

    out.push(String::new());
    out.push("【動爻解析】：".to_string());
    out.extend(moving_analysis(reading));

    out.push(String::new());
    out.push("【全盤爻象】：".to_string());
    out.extend(reading.lines_top_down().map(line_entry));

    out.push(String::new());
    out.push(CLOSING.to_string());
    out.join("\n")
}

fn moving_analysis(reading: &Reading) -> Vec<String> {
    let line = reading.moving();
    let mut out = vec![
        format!("第 {} 爻發動。", line.position.get()),
        format!(
            "動爻本氣：{}{} ({})",
            line.branch.name(),
            line.element.name(),
            line.relative.name()
        ),
    ];
    if let Some(c) = &line.changed {
        out.push(format!(
            "動化變出：{}{} ({})",
            c.branch.name(),
            c.element.name(),
            c.relative.name()
        ));
        out.push(format!("五行作用：變爻 {} 本爻", c.interaction.name()));
        out.push(format!(
            "特殊關係：{}",
            c.branch_interaction.map_or("無特殊刑沖合", |i| i.label())
        ));
    }
    if !reading.moving_line_text.is_empty() {
        out.push(format!("動爻爻辭：{}", reading.moving_line_text));
    }
    out
}

/// One line of the full table, with the change detail under a moving line.
fn line_entry(line: &AnnotatedLine) -> String {
    let base = format!(
        "第{}爻 {} {} [{}] {}{} {}",
        line.position.get(),
        line.polarity.name(),
        line.beast.name(),
        line.relative.name(),
        line.branch.name(),
        line.element.name(),
        line.markers()
    );
    let base = base.trim_end();
    match (&line.changed, line.is_moving) {
        (Some(c), true) => {
            let special = c
                .branch_interaction
                .map(|i| format!(" 【回頭{}】", i.label()))
                .unwrap_or_default();
            format!(
                "{base}\n    └── 動化: [{}] {}{} ({}本爻{special})",
                c.relative.name(),
                c.branch.name(),
                c.element.name(),
                c.interaction.name()
            )
        }
        _ => base.to_string(),
    }
}
