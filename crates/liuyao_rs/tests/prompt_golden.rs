//! Golden tests for the rendered outputs.

use liuyao_rs::*;
use pretty_assertions::assert_eq;

fn zhun() -> Reading {
    ReadingRequest::parse("6", "4", "14", "2024-02-10", "4")
        .unwrap()
        .with_topic(Some(Topic::Wealth))
        .reading(&ReadingConfig::default())
}

// ---------------------------------------------------------------------------
// Prompt
// ---------------------------------------------------------------------------

#[test]
fn zhun_prompt_body() {
    let text = format_prompt(&zhun(), Some("今年財運如何"));
    let expected_head = "\
道長您好，弟子請教。

【問事】：今年財運如何
【時間】：甲辰年 丙卯月 甲辰日 戊辰時
【四柱】：甲辰 / 丙卯 / 甲辰 / 戊辰
【日干】：甲 (需參看日建沖合)
【空亡】：寅、卯
【用神】：財運 取 妻財

【卦象】：水雷屯 之 水澤節
【宮位】：坎宮水行

【動爻解析】：
第 2 爻發動。
動爻本氣：寅木 (子孫)
動化變出：卯木 (子孫)
五行作用：變爻 比和 本爻
特殊關係：無特殊刑沖合
動爻爻辭：屯如邅如。

【全盤爻象】：
第6爻 陰 玄武 [兄弟] 子水
第5爻 陽 白虎 [官鬼] 戌土 應
第4爻 陰 螣蛇 [父母] 申金
第3爻 陰 勾陳 [官鬼] 辰土
第2爻 陰 朱雀 [子孫] 寅木 世空
    └── 動化: [子孫] 卯木 (比和本爻)
第1爻 陽 青龍 [兄弟] 子水

請依據《文王課》六爻法與《梅花易數》綜合解盤：";
    assert_eq!(&text[..expected_head.len()], expected_head);
}

#[test]
fn question_absent() {
    let text = format_prompt(&zhun(), None);
    assert!(text.contains("【問事】：（未填寫，請綜觀推斷）"));
}

#[test]
fn returning_punishment_is_named() {
    // 乾 line 6: 戌 turns into 兌's 未
    let r = cast_str("1", "1", "6", "2024-02-10", "4", &ReadingConfig::default()).unwrap();
    let text = format_prompt(&r, None);
    assert!(text.contains("特殊關係：相刑"));
    let entry = "第6爻 陽 玄武 [父母] 戌土 世\n    └── 動化: [父母] 未土 (比和本爻 【回頭相刑】)";
    assert!(text.contains(entry), "{text}");
}

// ---------------------------------------------------------------------------
// Request validation feeds rendering
// ---------------------------------------------------------------------------

#[test]
fn run_uses_config_format() {
    let request = ReadingRequest::parse("6", "4", "14", "2024-02-10", "4")
        .unwrap()
        .with_question(Some("問財"));
    let config = LiuyaoConfig {
        format: OutputFormat::Prompt,
        ..LiuyaoConfig::default()
    };
    let text = run(&request, &config).unwrap();
    assert!(text.contains("【問事】：問財"));

    let json = run(&request, &LiuyaoConfig { format: OutputFormat::Json, ..config }).unwrap();
    assert!(json.contains("\"moving_line\": 2"), "{json}");
}

#[test]
fn invalid_inputs_never_reach_the_engine() {
    let cases = [
        ("1.5", "2024-01-01", "0"),
        ("1", "2024-13-01", "0"),
        ("1", "2024-01-01", "12"),
    ];
    for (n1, date, slot) in cases {
        assert!(cast_str(n1, "1", "1", date, slot, &ReadingConfig::default()).is_err());
    }
}
