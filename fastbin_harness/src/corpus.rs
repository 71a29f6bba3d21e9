use crate::case::{Comparison, SuiteReport};
use fastbin_debug_proto::{
    Backwards, Bonk, CoRec, CoRec2, Empty, HolyMoley, JankyResult, OneOfEach, RandomStuff,
    RandomStuffV0, RecList, RecTree, Reserved, StructA, TestUnion, Wrapper,
};
use fastbin_types::types::{Binary, Double};
use std::collections::{BTreeMap, BTreeSet};
use std::f64::consts::PI;
use tracing::info;

pub fn ooe1() -> OneOfEach {
    OneOfEach {
        im_true: Some(true),
        im_false: Some(false),
        a_bite: Some(0xd6_u8 as i8),
        integer16: Some(27000),
        integer32: Some(1 << 24),
        integer64: Some(6000 * 1000 * 1000),
        double_precision: Some(Double(PI)),
        some_characters: Some(String::from("Debug THIS!")),
        zomg_unicode: Some(String::from("\u{d7}\n\u{7}\t")),
        ..OneOfEach::default()
    }
}

pub fn ooe2() -> OneOfEach {
    OneOfEach {
        integer16: Some(16),
        integer32: Some(32),
        integer64: Some(64),
        double_precision: Some(Double((5f64.sqrt() + 1.0) / 2.0)),
        some_characters: Some(String::from(":R (me going \"rrrr\")")),
        zomg_unicode: Some(String::from(
            "\u{4c0}\u{216e}\u{39d} \u{41d}\u{3bf}\u{217f}\u{43e}\u{261}\u{433}\u{430}\u{3c1}\
             \u{210e} \u{391}tt\u{3b1}\u{217d}\u{3ba}\u{1c3}\u{203c}",
        )),
        ..OneOfEach::default()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn holy_moley() -> HolyMoley {
    let big = [ooe1(), ooe2()]
        .into_iter()
        .map(|ooe| OneOfEach {
            a_bite: Some(0x22),
            ..ooe
        })
        .collect();
    let contain = BTreeSet::from([
        strings(&["and a one", "and a two"]),
        strings(&["then a one, two", "three!", "FOUR!"]),
        vec![],
    ]);
    let bonks = BTreeMap::from([
        (String::from("nothing"), vec![]),
        (
            String::from("something"),
            vec![Bonk::new(1, "Wait."), Bonk::new(2, "What?")],
        ),
        (
            String::from("poe"),
            vec![
                Bonk::new(3, "quoth"),
                Bonk::new(4, "the raven"),
                Bonk::new(5, "nevermore"),
            ],
        ),
    ]);
    HolyMoley {
        big: Some(big),
        contain: Some(contain),
        bonks: Some(bonks),
    }
}

pub fn holy_moley_no_set() -> HolyMoley {
    HolyMoley {
        contain: Some(BTreeSet::new()),
        ..holy_moley()
    }
}

pub fn holy_moley_empty_containers() -> HolyMoley {
    HolyMoley {
        big: Some(vec![]),
        contain: Some(BTreeSet::new()),
        bonks: Some(BTreeMap::new()),
    }
}

pub fn reserved() -> Reserved {
    Reserved {
        r#from: Some(String::from("reserved")),
    }
}

#[allow(clippy::approx_constant)]
pub fn random_stuff() -> RandomStuff {
    RandomStuff {
        a: Some(1),
        b: Some(2),
        c: Some(3),
        myintlist: Some((0..20).collect()),
        maps: Some(BTreeMap::from([
            (1, Wrapper { foo: Some(Empty {}) }),
            (2, Wrapper { foo: Some(Empty {}) }),
        ])),
        bigint: Some(124523452435),
        triple: Some(Double(3.14)),
        ..RandomStuff::default()
    }
}

/// Large enough to span many buffer refills.
pub fn random_stuff_huge() -> RandomStuff {
    RandomStuff {
        myintlist: Some((0..10000).collect()),
        ..RandomStuff::default()
    }
}

pub fn backwards() -> Backwards {
    Backwards {
        first_tag2: Some(4),
        second_tag1: Some(2),
    }
}

pub fn test_unions() -> Vec<(&'static str, TestUnion)> {
    vec![
        ("string_field", TestUnion::StringField(String::from("\u{d7}"))),
        ("i32_field", TestUnion::I32Field(i32::MIN)),
        ("struct_field", TestUnion::StructField(ooe1())),
        (
            "struct_list",
            TestUnion::StructList(vec![random_stuff(), RandomStuff::default()]),
        ),
        ("other_i32_field", TestUnion::OtherI32Field(-1)),
        ("i32_set", TestUnion::I32Set(BTreeSet::from([-1, 0, 1]))),
        ("i32_map", TestUnion::I32Map(BTreeMap::new())),
    ]
}

pub fn rec_tree() -> RecTree {
    let leaf = |item| RecTree {
        children: None,
        item: Some(item),
    };
    RecTree {
        children: Some(vec![
            RecTree {
                children: Some(vec![leaf(3), leaf(4)]),
                item: Some(2),
            },
            RecTree {
                children: Some(vec![]),
                item: Some(5),
            },
        ]),
        item: Some(1),
    }
}

pub fn co_rec() -> CoRec {
    CoRec {
        other: Some(Box::new(CoRec2 {
            other: Some(CoRec {
                other: Some(Box::new(CoRec2 { other: None })),
            }),
        })),
    }
}

/// Schema-defaulted fields explicitly unset.
pub fn ooe_unset_defaults() -> OneOfEach {
    OneOfEach {
        a_bite: None,
        integer64: None,
        i64_list: None,
        ..ooe1()
    }
}

pub fn one_of_each_raw_bytes() -> OneOfEach {
    OneOfEach {
        base64: Some(Binary((0..=255).collect())),
        what_who: Some(true),
        byte_list: Some(vec![]),
        i16_list: Some(vec![i16::MIN, -1, 0, i16::MAX]),
        i64_list: Some(vec![]),
        ..ooe2()
    }
}

/// Runs every case, continuing past failures.
pub fn run_suite(cmp: &Comparison) -> SuiteReport {
    info!(chunk_size = cmp.chunk_size(), "Running suite.");
    let mut report = SuiteReport::default();

    report.push(cmp.check_write("hm", &holy_moley()));
    report.push(cmp.check_read("hm_no_set", &holy_moley_no_set()));
    report.push(cmp.check_read("reserved", &reserved()));
    report.push(cmp.check_write("reserved", &reserved()));
    report.push(cmp.check_write("rs", &random_stuff()));
    report.push(cmp.check_read("rs", &random_stuff()));
    report.push(cmp.check_write("rshuge", &random_stuff_huge()));
    report.push(cmp.check_read("rshuge", &random_stuff_huge()));
    report.push(cmp.check_write("my_zero", &JankyResult::new(5)));
    report.push(cmp.check_read("my_zero", &JankyResult::new(5)));
    report.push(cmp.check_read("backwards", &backwards()));
    report.push(cmp.check_reordered("backwards", &backwards()));

    report.push(cmp.check_equivalence("ooe1", &ooe1()));
    report.push(cmp.check_equivalence("ooe2", &ooe2()));
    report.push(cmp.check_equivalence("ooe_default", &OneOfEach::default()));
    report.push(cmp.check_equivalence("ooe_unset_defaults", &ooe_unset_defaults()));
    report.push(cmp.check_equivalence("ooe_unset", &OneOfEach::unset()));
    report.push(cmp.check_equivalence("ooe_raw_bytes", &one_of_each_raw_bytes()));
    report.push(cmp.check_equivalence("hm", &holy_moley()));
    report.push(cmp.check_equivalence("hm_empty", &holy_moley_empty_containers()));
    report.push(cmp.check_equivalence("hm_unset", &HolyMoley::default()));
    report.push(cmp.check_equivalence("rshuge", &random_stuff_huge()));
    report.push(cmp.check_equivalence("empty", &Empty {}));
    report.push(cmp.check_equivalence("wrapper", &Wrapper { foo: Some(Empty {}) }));
    report.push(cmp.check_equivalence(
        "struct_a",
        &StructA {
            s: String::from("required"),
        },
    ));
    for (name, u) in test_unions() {
        report.push(cmp.check_equivalence(&format!("union_{name}"), &u));
    }
    report.push(cmp.check_equivalence("rec_tree", &rec_tree()));
    report.push(cmp.check_equivalence("rec_list", &RecList::chain(100)));
    report.push(cmp.check_equivalence("co_rec", &co_rec()));

    let rs = random_stuff();
    let rs_v0 = RandomStuffV0 {
        a: rs.a,
        b: rs.b,
        myintlist: rs.myintlist.clone(),
    };
    report.push(cmp.check_forward_compat("rs_as_v0", &rs, &rs_v0));
    report.push(cmp.check_forward_compat(
        "union_as_backwards",
        &TestUnion::I32Field(7),
        &Backwards {
            first_tag2: Some(7),
            second_tag1: None,
        },
    ));

    info!(%report, "Suite done.");
    report
}
