// Level 1 definition: 《咏鹅》 骆宾王
// Single-stroke radicals (纟, 氵) and two 欠/页 right-hand components.
use super::{LevelDesc, PairDesc};

pub static LEVEL1: LevelDesc = LevelDesc {
    level_number: 1,
    grade: "一年级上",
    poem_title: "咏鹅",
    poem_author: "骆宾王",
    full_line: "白毛浮绿水，红掌拨清波",
    meaning: "洁白的羽毛漂浮在碧绿的水面上，红红的脚掌拨动着清清的水波。",
    full_poem: &["鹅，鹅，鹅，", "曲项向天歌。", "白毛浮绿水，", "红掌拨清波。"],
    pairs: &[
        PairDesc { id: "l1p1", result: "鹅", parts: ["我", "鸟"] },
        PairDesc { id: "l1p2", result: "项", parts: ["工", "页"] },
        PairDesc { id: "l1p3", result: "歌", parts: ["哥", "欠"] },
        PairDesc { id: "l1p4", result: "绿", parts: ["纟", "录"] },
        PairDesc { id: "l1p5", result: "红", parts: ["纟", "工"] },
        PairDesc { id: "l1p6", result: "波", parts: ["氵", "皮"] },
    ],
};
