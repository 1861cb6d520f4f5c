// Level 6 definition: 《江雪》 柳宗元
// Final level: advancing from its completion ends the game.
use super::{LevelDesc, PairDesc};

pub static LEVEL6: LevelDesc = LevelDesc {
    level_number: 6,
    grade: "二年级上",
    poem_title: "江雪",
    poem_author: "柳宗元",
    full_line: "孤舟蓑笠翁，独钓寒江雪",
    meaning: "江上一条孤零零的小船，船上坐着身披蓑衣、头戴斗笠的老渔翁，独自在大雪覆盖的寒冷江面上垂钓。",
    full_poem: &["千山鸟飞绝，", "万径人踪灭。", "孤舟蓑笠翁，", "独钓寒江雪。"],
    pairs: &[
        PairDesc { id: "l6p1", result: "绝", parts: ["纟", "色"] },
        PairDesc { id: "l6p2", result: "径", parts: ["彳", "圣"] },
        PairDesc { id: "l6p3", result: "踪", parts: ["⻊", "宗"] },
        PairDesc { id: "l6p4", result: "孤", parts: ["子", "瓜"] },
        PairDesc { id: "l6p5", result: "独", parts: ["犭", "虫"] },
        PairDesc { id: "l6p6", result: "钓", parts: ["钅", "勺"] },
        PairDesc { id: "l6p7", result: "江", parts: ["氵", "工"] },
    ],
};
