// Level 3 definition: 《静夜思》 李白
use super::{LevelDesc, PairDesc};

pub static LEVEL3: LevelDesc = LevelDesc {
    level_number: 3,
    grade: "一年级下",
    poem_title: "静夜思",
    poem_author: "李白",
    full_line: "床前明月光，疑是地上霜",
    meaning: "明亮的月光洒在床前的地上，好像地上泛起了一层白霜。",
    full_poem: &["床前明月光，", "疑是地上霜。", "举头望明月，", "低头思故乡。"],
    pairs: &[
        PairDesc { id: "l3p1", result: "明", parts: ["日", "月"] },
        PairDesc { id: "l3p2", result: "地", parts: ["土", "也"] },
        PairDesc { id: "l3p3", result: "霜", parts: ["雨", "相"] },
        PairDesc { id: "l3p4", result: "低", parts: ["亻", "氐"] },
        PairDesc { id: "l3p5", result: "故", parts: ["古", "攵"] },
    ],
};
