//! Baked-in default word-fragment lists for the contractions oracle.
//!
//! All four tables are lowercase and known at compile time, so they live as
//! `phf::Set`s rather than behind a lazily-built `HashSet` — there is nothing
//! to defer construction of.

/// Words whose leading apostrophe is unambiguous (dialect contractions,
/// elisions): `'tis`, `'twas`, `'n`, ...
pub static BEGAN_UNAMBIGUOUS: phf::Set<&'static str> = phf::phf_set! {
    "tis", "twas", "twere", "twill", "twon't", "tween", "til", "bout",
    "cause", "em", "er", "ere", "gainst", "kay", "lo", "ma'am", "m",
    "n", "neath", "nuff", "prentice", "round", "sblood", "sdeath",
    "sfoot", "shun", "sup", "til", "tude", "tother", "twixt", "un",
    "uns", "ve", "d", "ll", "re", "s", "t", "clock", "ight", "fraid",
    "bout", "specially", "fore", "cept", "sup",
};

/// Words whose leading apostrophe is ambiguous without resolver context:
/// could be a contraction or an opening single quote.
pub static BEGAN_AMBIGUOUS: phf::Set<&'static str> = phf::phf_set! {
    "em", "cause", "kay", "bout", "nother", "splainin", "zactly",
    "fraid", "round", "specially", "nuff", "tater", "bacca", "taters",
};

/// Words whose trailing apostrophe is unambiguously a contraction
/// (dropped-*g* gerunds and similar) rather than a closing quote.
pub static ENDED_UNAMBIGUOUS: phf::Set<&'static str> = phf::phf_set! {
    "goin", "doin", "nothin", "somethin", "anythin", "everythin",
    "comin", "runnin", "walkin", "talkin", "lookin", "thinkin",
    "playin", "singin", "dancin", "jumpin", "sittin", "standin",
    "wonderin", "readin", "writin", "swimmin", "drivin", "fishin",
    "huntin", "shootin", "cookin", "bakin", "workin", "sleepin",
    "wishin", "hopin", "waitin", "tryin", "cryin", "laughin",
    "smilin", "shoutin", "whisperin", "fightin", "buildin",
    "makin", "takin", "givin", "gettin", "havin", "bein", "seein",
    "sayin", "callin", "tellin", "askin", "knowin", "feelin",
    "startin", "stoppin", "goin'", "nuthin", "somethin'",
};

/// Words whose trailing apostrophe is ambiguous without resolver context,
/// beyond the `s|z|x|n` fallback in [`super::Contractions::ended_ambiguously`].
pub static ENDED_AMBIGUOUS: phf::Set<&'static str> = phf::phf_set! {
    "y'all", "ol", "lil", "somethin", "nothin", "anyhow", "anyways",
};
