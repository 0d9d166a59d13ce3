//! The 64-hexagram text table (卦辭 and 爻辭).
//!
//! Entries are keyed `"<upper id>-<lower id>"` and stored at
//! `upper * 8 + lower`. A pair missing from the
//! table is not an error: lookups fall back to a generated placeholder so
//! a reading always completes.

use std::borrow::Cow;

use serde::Serialize;

use crate::trigram::Trigram;

/// One row of the hexagram table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexagramEntry {
    /// Upper trigram id.
    pub upper: u8,
    /// Lower trigram id.
    pub lower: u8,
    /// Position in the King Wen sequence (1..=64).
    pub king_wen: u8,
    /// Traditional name, e.g. `乾為天`.
    pub name: &'static str,
    /// Judgment text (卦辭).
    pub judgment: &'static str,
    /// Line texts, index 0 = line 1 (初爻).
    pub lines: [&'static str; 6],
}

impl HexagramEntry {
    const fn new(
        upper: u8,
        lower: u8,
        king_wen: u8,
        name: &'static str,
        judgment: &'static str,
        lines: [&'static str; 6],
    ) -> Self {
        Self {
            upper,
            lower,
            king_wen,
            name,
            judgment,
            lines,
        }
    }

    /// Table key, `"<upper>-<lower>"`.
    pub fn key(&self) -> String {
        hexagram_key(self.upper, self.lower)
    }
}

/// Resolved text for a hexagram, either from the table or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramText {
    /// Table key, `"<upper>-<lower>"`.
    pub key: String,
    /// Name; generated as `卦 (u-l)` for a placeholder.
    pub name: Cow<'static, str>,
    /// King Wen number, `None` for a placeholder.
    pub king_wen: Option<u8>,
    /// Judgment text.
    pub judgment: &'static str,
    /// Line texts, index 0 = line 1.
    pub lines: [&'static str; 6],
    /// True when the pair was not found in the table.
    pub placeholder: bool,
}

impl HexagramText {
    /// Text of line `position` (1..=6), empty when out of range.
    pub fn line(&self, position: u8) -> &'static str {
        match position {
            1..=6 => self.lines[(position - 1) as usize],
            _ => "",
        }
    }
}

const PLACEHOLDER_JUDGMENT: &str = "（請參考六爻五行分析）";
const PLACEHOLDER_LINES: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];

/// Table key for a trigram id pair.
pub fn hexagram_key(upper: u8, lower: u8) -> String {
    format!("{upper}-{lower}")
}

/// All 64 entries, sorted by (upper, lower).
pub const HEXAGRAM_TABLE: [HexagramEntry; 64] = [
    HexagramEntry::new(0, 0, 2, "坤為地", "元亨，利牝馬之貞。", [
        "履霜，堅冰至。", "直方大。", "含章可貞。", "括囊。", "黃裳，元吉。", "龍戰于野。",
    ]),
    HexagramEntry::new(0, 1, 11, "地天泰", "小往大來，吉，亨。", [
        "拔茅茹。", "包荒。", "無平不陂。", "翩翩。", "帝乙歸妹。", "城復于隍。",
    ]),
    HexagramEntry::new(0, 2, 19, "地澤臨", "元亨，利貞。", [
        "咸臨。", "咸臨。", "甘臨。", "至臨。", "知臨。", "敦臨。",
    ]),
    HexagramEntry::new(0, 3, 36, "地火明夷", "利艱貞。", [
        "明夷于飛。", "明夷。", "明夷于南狩。", "入于左腹。", "箕子之明夷。", "不明晦。",
    ]),
    HexagramEntry::new(0, 4, 24, "地雷復", "亨。出入無疾。", [
        "不遠復。", "休復。", "頻復。", "中行獨復。", "敦復。", "迷復。",
    ]),
    HexagramEntry::new(0, 5, 46, "地風升", "元亨。", [
        "允升。", "孚乃利用禴。", "升虛邑。", "王用亨于岐山。", "貞吉。", "冥升。",
    ]),
    HexagramEntry::new(0, 6, 7, "地水師", "貞，丈人吉，無咎。", [
        "師出以律。", "在師中。", "師或輿尸。", "師左次。", "田有禽。", "大君有命。",
    ]),
    HexagramEntry::new(0, 7, 15, "地山謙", "亨，君子有終。", [
        "謙謙君子。", "鳴謙。", "勞謙君子。", "無不利，撝謙。", "不富以其鄰。", "鳴謙。",
    ]),
    HexagramEntry::new(1, 0, 12, "天地否", "否之匪人。", [
        "拔茅茹。", "包承。", "包羞。", "有命無咎。", "休否。", "傾否。",
    ]),
    HexagramEntry::new(1, 1, 1, "乾為天", "元亨利貞。", [
        "潛龍勿用。", "見龍在田。", "君子終日乾乾。", "或躍在淵。", "飛龍在天。", "亢龍有悔。",
    ]),
    HexagramEntry::new(1, 2, 10, "天澤履", "履虎尾，不咥人，亨。", [
        "素履。", "履道坦坦。", "眇能視。", "履虎尾。", "夬履。", "視履考祥。",
    ]),
    HexagramEntry::new(1, 3, 13, "天火同人", "同人于野，亨。", [
        "同人于門。", "同人于宗。", "伏戎于莽。", "乘其墉。", "同人，先號啕而後笑。", "同人于郊。",
    ]),
    HexagramEntry::new(1, 4, 25, "天雷無妄", "元亨，利貞。", [
        "無妄。", "不耕穫。", "無妄之災。", "可貞。", "無妄之疾。", "無妄。",
    ]),
    HexagramEntry::new(1, 5, 44, "天風姤", "女壯，勿用取女。", [
        "繫于金柅。", "包有魚。", "臀無膚。", "包無魚。", "以杞包瓜。", "姤其角。",
    ]),
    HexagramEntry::new(1, 6, 6, "天水訟", "有孚，窒惕，中吉，終凶。", [
        "不永所事。", "不克訟。", "食舊德。", "不克訟。", "訟元吉。", "或錫之鞶帶。",
    ]),
    HexagramEntry::new(1, 7, 33, "天山遯", "亨，小利貞。", [
        "遯尾。", "執之用黃牛之革。", "係遯。", "好遯。", "嘉遯。", "肥遯。",
    ]),
    HexagramEntry::new(2, 0, 45, "澤地萃", "亨。王假有廟。", [
        "有孚不終。", "引吉。", "萃如。", "大吉。", "萃有位。", "齎咨涕洟。",
    ]),
    HexagramEntry::new(2, 1, 43, "澤天夬", "揚于王庭。", [
        "壯于前趾。", "惕號。", "壯于頄。", "臀無膚。", "莧陸夬夬。", "無號。",
    ]),
    HexagramEntry::new(2, 2, 58, "兌為澤", "亨，利貞。", [
        "和兌。", "孚兌。", "來兌。", "商兌。", "孚于剝。", "引兌。",
    ]),
    HexagramEntry::new(2, 3, 49, "澤火革", "己日乃孚。", [
        "鞏用黃牛之革。", "己日乃革之。", "征凶。", "悔亡。", "大人虎變。", "君子豹變。",
    ]),
    HexagramEntry::new(2, 4, 17, "澤雷隨", "元亨，利貞，無咎。", [
        "官有變。", "係小子。", "係丈夫。", "隨有獲。", "孚于嘉。", "拘係之。",
    ]),
    HexagramEntry::new(2, 5, 28, "澤風大過", "棟橈。", [
        "藉用白茅。", "枯楊生稊。", "棟橈。", "棟隆。", "枯楊生華。", "過涉滅頂。",
    ]),
    HexagramEntry::new(2, 6, 47, "澤水困", "亨，貞，大人吉。", [
        "臀困于株木。", "困于酒食。", "困于石。", "來徐徐。", "劓刖。", "困于葛藟。",
    ]),
    HexagramEntry::new(2, 7, 31, "澤山咸", "亨，利貞。", [
        "咸其拇。", "咸其腓。", "咸其股。", "貞吉。", "咸其脢。", "咸其輔。",
    ]),
    HexagramEntry::new(3, 0, 35, "火地晉", "康侯用錫馬蕃庶。", [
        "晉如。", "晉如。", "眾允。", "晉如鼫鼠。", "悔亡。", "晉其角。",
    ]),
    HexagramEntry::new(3, 1, 14, "火天大有", "元亨。", [
        "無交害。", "大車以載。", "公用亨于天子。", "匪其彭。", "厥孚交如。", "自天佑之。",
    ]),
    HexagramEntry::new(3, 2, 38, "火澤睽", "小事吉。", [
        "悔亡。", "遇主于巷。", "見輿曳。", "睽孤。", "悔亡。", "睽孤。",
    ]),
    HexagramEntry::new(3, 3, 30, "離為火", "利貞，亨。", [
        "履錯然。", "黃離。", "日昃之離。", "突如其來如。", "出涕沱若。", "王用出征。",
    ]),
    HexagramEntry::new(3, 4, 21, "火雷噬嗑", "亨。利用獄。", [
        "屨校滅趾。", "噬膚滅鼻。", "噬臘肉。", "噬乾胏。", "噬乾肉。", "何校滅耳。",
    ]),
    HexagramEntry::new(3, 5, 50, "火風鼎", "元吉，亨。", [
        "鼎顛趾。", "鼎有實。", "鼎耳革。", "鼎折足。", "鼎黃耳金鉉。", "鼎玉鉉。",
    ]),
    HexagramEntry::new(3, 6, 64, "火水未濟", "亨，小狐汔濟。", [
        "濡其尾。", "曳其輪。", "未濟。", "貞吉。", "貞吉。", "有孚于飲酒。",
    ]),
    HexagramEntry::new(3, 7, 56, "火山旅", "小亨，旅貞吉。", [
        "旅瑣瑣。", "旅即次。", "旅焚其次。", "旅于處。", "射雉一矢亡。", "鳥焚其巢。",
    ]),
    HexagramEntry::new(4, 0, 16, "雷地豫", "利建侯行師。", [
        "鳴豫。", "介于石。", "盱豫。", "由豫。", "貞疾。", "冥豫。",
    ]),
    HexagramEntry::new(4, 1, 34, "雷天大壯", "利貞。", [
        "壯于趾。", "貞吉。", "小人用壯。", "貞吉。", "喪羊于易。", "羝羊觸藩。",
    ]),
    HexagramEntry::new(4, 2, 54, "雷澤歸妹", "征凶。", [
        "歸妹以弟。", "眇能視。", "歸妹以須。", "歸妹愆期。", "帝乙歸妹。", "女承筐無實。",
    ]),
    HexagramEntry::new(4, 3, 55, "雷火豐", "亨。", [
        "遇其配主。", "豐其蔀。", "豐其沛。", "豐其蔀。", "來章。", "豐其屋。",
    ]),
    HexagramEntry::new(4, 4, 51, "震為雷", "亨。震來虩虩。", [
        "震來虩虩。", "震來厲。", "震蘇蘇。", "震遂泥。", "震往來厲。", "震索索。",
    ]),
    HexagramEntry::new(4, 5, 32, "雷風恆", "亨，無咎。", [
        "浚恆。", "悔亡。", "不恆其德。", "田無禽。", "恆其德。", "振恆。",
    ]),
    HexagramEntry::new(4, 6, 40, "雷水解", "利西南。", [
        "無咎。", "田獲三狐。", "負且乘。", "解而拇。", "君子維有解。", "公用射隼。",
    ]),
    HexagramEntry::new(4, 7, 62, "雷山小過", "亨，利貞。", [
        "飛鳥以凶。", "過其祖。", "弗過防之。", "無咎。", "密雲不雨。", "弗遇過之。",
    ]),
    HexagramEntry::new(5, 0, 20, "風地觀", "盥而不薦。", [
        "童觀。", "闚觀。", "觀我生。", "觀國之光。", "觀我生。", "觀其生。",
    ]),
    HexagramEntry::new(5, 1, 9, "風天小畜", "亨。密雲不雨。", [
        "復自道。", "牽復。", "輿說輻。", "有孚，血去惕出。", "有孚攣如。", "既雨既處。",
    ]),
    HexagramEntry::new(5, 2, 61, "風澤中孚", "豚魚吉。", [
        "虞吉。", "鳴鶴在陰。", "得敵。", "月幾望。", "有孚攣如。", "翰音登于天。",
    ]),
    HexagramEntry::new(5, 3, 37, "風火家人", "利女貞。", [
        "閑有家。", "無攸遂。", "家人嗃嗃。", "富家。", "王假有家。", "有孚威如。",
    ]),
    HexagramEntry::new(5, 4, 42, "風雷益", "利有攸往。", [
        "利用為大作。", "或益之。", "益之用凶事。", "中行。", "有孚惠心。", "莫益之。",
    ]),
    HexagramEntry::new(5, 5, 57, "巽為風", "小亨。", [
        "進退。", "巽在床下。", "頻巽。", "悔亡。", "貞吉。", "巽在床下。",
    ]),
    HexagramEntry::new(5, 6, 59, "風水渙", "亨。", [
        "用拯馬壯。", "渙奔其機。", "渙其躬。", "渙其群。", "渙汗其大號。", "渙其血。",
    ]),
    HexagramEntry::new(5, 7, 53, "風山漸", "女歸吉。", [
        "鴻漸于干。", "鴻漸于磐。", "鴻漸于陸。", "鴻漸于木。", "鴻漸于陵。", "鴻漸于陸。",
    ]),
    HexagramEntry::new(6, 0, 8, "水地比", "吉。原筮，元永貞，無咎。", [
        "有孚比之。", "比之自內。", "比之匪人。", "外比之。", "顯比。", "比之無首。",
    ]),
    HexagramEntry::new(6, 1, 5, "水天需", "有孚，光亨，貞吉。", [
        "需于郊。", "需于沙。", "需于泥。", "需于血。", "需于酒食。", "入于穴。",
    ]),
    HexagramEntry::new(6, 2, 60, "水澤節", "亨。", [
        "不出戶庭。", "不出門庭。", "不節若。", "安節。", "甘節。", "苦節。",
    ]),
    HexagramEntry::new(6, 3, 63, "水火既濟", "亨，小利貞。", [
        "曳其輪。", "婦喪其弗。", "高宗伐鬼方。", "繻有衣袽。", "東鄰殺牛。", "濡其首。",
    ]),
    HexagramEntry::new(6, 4, 3, "水雷屯", "元亨利貞。勿用有攸往。", [
        "磐桓，利居貞。", "屯如邅如。", "即鹿無虞。", "乘馬班如。", "屯其膏。", "乘馬班如，泣血漣如。",
    ]),
    HexagramEntry::new(6, 5, 48, "水風井", "改邑不改井。", [
        "井泥不食。", "井谷射鮒。", "井渫不食。", "井甃。", "井冽。", "井收勿幕。",
    ]),
    HexagramEntry::new(6, 6, 29, "坎為水", "習坎，有孚。", [
        "習坎。", "坎有險。", "來之坎坎。", "樽酒簋貳。", "坎不盈。", "係用徽纆。",
    ]),
    HexagramEntry::new(6, 7, 39, "水山蹇", "利西南，不利東北。", [
        "往蹇。", "王臣蹇蹇。", "往蹇。", "往蹇。", "大蹇。", "往蹇。",
    ]),
    HexagramEntry::new(7, 0, 23, "山地剝", "不利有攸往。", [
        "剝床以足。", "剝床以辨。", "剝之。", "剝床以膚。", "貫魚。", "碩果不食。",
    ]),
    HexagramEntry::new(7, 1, 26, "山天大畜", "利貞。", [
        "有厲。", "輿說輻。", "良馬逐。", "童牛之牿。", "豶豕之牙。", "何天之衢。",
    ]),
    HexagramEntry::new(7, 2, 41, "山澤損", "有孚，元吉。", [
        "已事遄往。", "利貞。", "三人行。", "損其疾。", "或益之。", "弗損益之。",
    ]),
    HexagramEntry::new(7, 3, 22, "山火賁", "亨。小利有攸往。", [
        "賁其趾。", "賁其須。", "賁如濡如。", "賁如皤如。", "賁于丘園。", "白賁。",
    ]),
    HexagramEntry::new(7, 4, 27, "山雷頤", "貞吉。觀頤。", [
        "捨爾靈龜。", "顛頤。", "拂頤。", "顛頤。", "拂經。", "由頤。",
    ]),
    HexagramEntry::new(7, 5, 18, "山風蠱", "元亨，利涉大川。", [
        "幹父之蠱。", "幹母之蠱。", "幹父之蠱。", "裕父之蠱。", "幹父之蠱。", "不事王侯。",
    ]),
    HexagramEntry::new(7, 6, 4, "山水蒙", "亨。匪我求童蒙，童蒙求我。", [
        "發蒙。", "包蒙吉。", "勿用取女。", "困蒙吝。", "童蒙吉。", "擊蒙。",
    ]),
    HexagramEntry::new(7, 7, 52, "艮為山", "艮其背。", [
        "艮其趾。", "艮其腓。", "艮其限。", "艮其身。", "艮其輔。", "敦艮。",
    ]),
];

/// Table entry for a raw id pair; ids outside 0..8 have none.
pub fn hexagram_entry_for_ids(upper: u8, lower: u8) -> Option<&'static HexagramEntry> {
    let table: &'static [HexagramEntry; 64] = &HEXAGRAM_TABLE;
    if upper < 8 && lower < 8 {
        table.get(usize::from(upper) * 8 + usize::from(lower))
    } else {
        None
    }
}

/// Table entry for a `"<upper>-<lower>"` key.
pub fn hexagram_entry_by_key(key: &str) -> Option<&'static HexagramEntry> {
    let (upper, lower) = key.trim().split_once('-')?;
    hexagram_entry_for_ids(upper.parse().ok()?, lower.parse().ok()?)
}

/// Table entry for a trigram pair.
pub fn hexagram_entry(upper: Trigram, lower: Trigram) -> Option<&'static HexagramEntry> {
    hexagram_entry_for_ids(upper.id(), lower.id())
}

/// Text for a trigram pair, falling back to a placeholder.
pub fn hexagram_text(upper: Trigram, lower: Trigram) -> HexagramText {
    hexagram_text_for_ids(upper.id(), lower.id())
}

/// Text for a raw id pair, falling back to a placeholder for unknown keys.
pub fn hexagram_text_for_ids(upper: u8, lower: u8) -> HexagramText {
    let key = hexagram_key(upper, lower);
    match hexagram_entry_for_ids(upper, lower) {
        Some(entry) => HexagramText {
            key,
            name: Cow::Borrowed(entry.name),
            king_wen: Some(entry.king_wen),
            judgment: entry.judgment,
            lines: entry.lines,
            placeholder: false,
        },
        None => HexagramText {
            name: Cow::Owned(format!("卦 ({key})")),
            key,
            king_wen: None,
            judgment: PLACEHOLDER_JUDGMENT,
            lines: PLACEHOLDER_LINES,
            placeholder: true,
        },
    }
}

/// Entry by King Wen sequence number (1..=64).
pub fn hexagram_by_king_wen(number: u8) -> Option<&'static HexagramEntry> {
    HEXAGRAM_TABLE.iter().find(|e| e.king_wen == number)
}
