// Level 4 definition: 《悯农》(其二) 李绅
// 汗 and 滴 share 氵 on the left; only the pair id decides a match.
use super::{LevelDesc, PairDesc};

pub static LEVEL4: LevelDesc = LevelDesc {
    level_number: 4,
    grade: "一年级下",
    poem_title: "悯农",
    poem_author: "李绅",
    full_line: "谁知盘中餐，粒粒皆辛苦",
    meaning: "又有谁知道盘中的饭食，每一粒都饱含着农民的辛苦。",
    full_poem: &["锄禾日当午，", "汗滴禾下土。", "谁知盘中餐，", "粒粒皆辛苦。"],
    pairs: &[
        PairDesc { id: "l4p1", result: "锄", parts: ["钅", "助"] },
        PairDesc { id: "l4p2", result: "汗", parts: ["氵", "干"] },
        PairDesc { id: "l4p3", result: "滴", parts: ["氵", "啇"] },
        PairDesc { id: "l4p4", result: "谁", parts: ["讠", "隹"] },
        PairDesc { id: "l4p5", result: "知", parts: ["矢", "口"] },
        PairDesc { id: "l4p6", result: "粒", parts: ["米", "立"] },
    ],
};
