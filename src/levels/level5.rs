// Level 5 definition: 《登鹳雀楼》 王之涣
use super::{LevelDesc, PairDesc};

pub static LEVEL5: LevelDesc = LevelDesc {
    level_number: 5,
    grade: "二年级上",
    poem_title: "登鹳雀楼",
    poem_author: "王之涣",
    full_line: "欲穷千里目，更上一层楼",
    meaning: "想要看到千里之外的风光，那就要再登上更高的一层楼。",
    full_poem: &["白日依山尽，", "黄河入海流。", "欲穷千里目，", "更上一层楼。"],
    pairs: &[
        PairDesc { id: "l5p1", result: "依", parts: ["亻", "衣"] },
        PairDesc { id: "l5p2", result: "河", parts: ["氵", "可"] },
        PairDesc { id: "l5p3", result: "海", parts: ["氵", "每"] },
        PairDesc { id: "l5p4", result: "欲", parts: ["谷", "欠"] },
        PairDesc { id: "l5p5", result: "楼", parts: ["木", "娄"] },
    ],
};
