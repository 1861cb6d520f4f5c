// Level 2 definition: 《春晓》 孟浩然
use super::{LevelDesc, PairDesc};

pub static LEVEL2: LevelDesc = LevelDesc {
    level_number: 2,
    grade: "一年级下",
    poem_title: "春晓",
    poem_author: "孟浩然",
    full_line: "春眠不觉晓，处处闻啼鸟",
    meaning: "春天睡得香甜，不知不觉天已经亮了，到处都能听到小鸟清脆的啼叫声。",
    full_poem: &["春眠不觉晓，", "处处闻啼鸟。", "夜来风雨声，", "花落知多少。"],
    pairs: &[
        PairDesc { id: "l2p1", result: "眠", parts: ["目", "民"] },
        PairDesc { id: "l2p2", result: "晓", parts: ["日", "尧"] },
        PairDesc { id: "l2p3", result: "闻", parts: ["门", "耳"] },
        PairDesc { id: "l2p4", result: "啼", parts: ["口", "帝"] },
    ],
};
