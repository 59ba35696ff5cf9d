//! Word lists backing the tagger and lemmatizer.
//!
//! The lemmatizer cannot consult a full dictionary, so these tables carry the
//! irregular forms plus the small sets of base words the detachment rules need
//! to disambiguate against.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

fn set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

fn map(pairs: &'static [(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

/// Irregular noun plurals.
pub static NOUN_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    map(&[
        ("children", "child"), ("men", "man"), ("women", "woman"), ("people", "people"),
        ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"),
        ("oxen", "ox"), ("lice", "louse"), ("dice", "die"),
        ("analyses", "analysis"), ("bases", "basis"), ("crises", "crisis"),
        ("diagnoses", "diagnosis"), ("hypotheses", "hypothesis"), ("theses", "thesis"),
        ("syntheses", "synthesis"), ("emphases", "emphasis"), ("parentheses", "parenthesis"),
        ("prognoses", "prognosis"), ("ellipses", "ellipsis"), ("oases", "oasis"),
        ("axes", "axis"), ("criteria", "criterion"), ("phenomena", "phenomenon"),
        ("media", "medium"), ("bacteria", "bacterium"), ("curricula", "curriculum"),
        ("strata", "stratum"), ("memoranda", "memorandum"), ("spectra", "spectrum"),
        ("maxima", "maximum"), ("minima", "minimum"), ("optima", "optimum"),
        ("formulae", "formula"), ("algae", "alga"), ("larvae", "larva"),
        ("stimuli", "stimulus"), ("nuclei", "nucleus"), ("radii", "radius"),
        ("foci", "focus"), ("fungi", "fungus"), ("alumni", "alumnus"), ("syllabi", "syllabus"),
        ("loci", "locus"), ("cacti", "cactus"), ("corpora", "corpus"), ("genera", "genus"),
        ("matrices", "matrix"), ("indices", "index"), ("vertices", "vertex"),
        ("appendices", "appendix"), ("apices", "apex"), ("schemata", "schema"),
        ("leaves", "leaf"), ("lives", "life"), ("knives", "knife"), ("wives", "wife"),
        ("halves", "half"), ("selves", "self"), ("shelves", "shelf"), ("wolves", "wolf"),
        ("thieves", "thief"), ("loaves", "loaf"), ("calves", "calf"),
        ("heroes", "hero"), ("potatoes", "potato"), ("tomatoes", "tomato"),
        ("echoes", "echo"), ("vetoes", "veto"),
        ("businessmen", "businessman"), ("chairmen", "chairman"), ("salesmen", "salesman"),
        ("spokesmen", "spokesman"), ("craftsmen", "craftsman"), ("policemen", "policeman"),
        ("firemen", "fireman"), ("freshmen", "freshman"), ("workmen", "workman"),
        ("biases", "bias"), ("aliases", "alias"), ("canvases", "canvas"), ("atlases", "atlas"),
        ("buses", "bus"), ("gases", "gas"), ("lenses", "lens"),
    ])
});

/// Nouns ending in `s` that are already base forms.
pub static NOUN_INVARIANTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "series", "species", "news", "means", "headquarters", "physics", "mathematics",
        "economics", "analytics", "robotics", "ethics", "dynamics", "semantics", "logistics",
        "linguistics", "electronics", "informatics", "bioinformatics", "genomics", "proteomics",
        "politics", "aesthetics", "ergonomics", "athletics", "mechanics", "optics", "graphics",
        "mechatronics", "pharmaceutics", "econometrics", "bibliometrics", "scientometrics",
        "bias", "alias", "atlas", "canvas", "christmas", "pancreas", "chaos", "kudos", "ethos",
        "pathos", "cosmos", "thermos", "lens", "whereas", "perhaps", "always", "sometimes",
        "afterwards", "towards", "besides", "nevertheless",
    ])
});

/// `-ies` plurals whose singular ends in `-ie`.
pub static IE_PLURALS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "movies", "cookies", "calories", "zombies", "rookies", "selfies", "smoothies",
        "brownies", "freebies", "hippies", "prairies", "genies", "goalies", "aunties",
        "lies", "ties", "pies", "dies", "hoodies", "newbies",
    ])
});

/// Singular nouns ending in `-che`.
pub static CHE_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "cache", "niche", "headache", "avalanche", "moustache", "psyche", "cliche", "attache",
        "microcache", "quiche", "creche",
    ])
});

/// Irregular verb forms, including doubled-consonant forms the rules miss.
pub static VERB_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    map(&[
        ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
        ("been", "be"), ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"),
        ("does", "do"), ("did", "do"), ("done", "do"), ("goes", "go"), ("went", "go"),
        ("gone", "go"), ("made", "make"), ("ran", "run"), ("built", "build"),
        ("began", "begin"), ("begun", "begin"), ("brought", "bring"), ("bought", "buy"),
        ("came", "come"), ("chose", "choose"), ("chosen", "choose"), ("drew", "draw"),
        ("drawn", "draw"), ("drove", "drive"), ("driven", "drive"), ("ate", "eat"),
        ("eaten", "eat"), ("fell", "fall"), ("fallen", "fall"), ("felt", "feel"),
        ("found", "find"), ("flew", "fly"), ("flown", "fly"), ("forgot", "forget"),
        ("forgotten", "forget"), ("gave", "give"), ("given", "give"), ("grew", "grow"),
        ("grown", "grow"), ("held", "hold"), ("kept", "keep"), ("knew", "know"),
        ("known", "know"), ("led", "lead"), ("left", "leave"), ("lost", "lose"),
        ("meant", "mean"), ("met", "meet"), ("paid", "pay"), ("said", "say"), ("seen", "see"),
        ("sent", "send"), ("shown", "show"), ("sold", "sell"), ("spent", "spend"),
        ("stood", "stand"), ("taught", "teach"), ("thought", "think"), ("told", "tell"),
        ("took", "take"), ("taken", "take"), ("understood", "understand"), ("won", "win"),
        ("wrote", "write"), ("written", "write"), ("spoke", "speak"), ("spoken", "speak"),
        ("rose", "rise"), ("risen", "rise"), ("sought", "seek"), ("struck", "strike"),
        ("caught", "catch"), ("dealt", "deal"), ("fought", "fight"), ("hid", "hide"),
        ("hidden", "hide"), ("shook", "shake"), ("shaken", "shake"), ("stole", "steal"),
        ("stolen", "steal"), ("woke", "wake"), ("woken", "wake"), ("wore", "wear"),
        ("worn", "wear"), ("threw", "throw"), ("thrown", "throw"), ("undertook", "undertake"),
        ("undertaken", "undertake"), ("withdrew", "withdraw"), ("withdrawn", "withdraw"),
        ("arose", "arise"), ("arisen", "arise"), ("became", "become"), ("borne", "bear"),
        ("broke", "break"), ("broken", "break"), ("fed", "feed"), ("bred", "breed"),
        ("fled", "flee"), ("slid", "slide"), ("spun", "spin"), ("stuck", "stick"),
        ("swept", "sweep"), ("slept", "sleep"), ("wept", "weep"), ("bound", "bind"),
        ("ground", "grind"), ("wound", "wind"), ("overcame", "overcome"),
        ("outgrew", "outgrow"), ("mistook", "mistake"), ("mistaken", "mistake"),
        ("rebuilt", "rebuild"), ("rewrote", "rewrite"), ("rewritten", "rewrite"),
        ("modelling", "model"), ("modelled", "model"), ("labelling", "label"),
        ("labelled", "label"), ("travelling", "travel"), ("travelled", "travel"),
        ("controlling", "control"), ("controlled", "control"), ("cancelling", "cancel"),
        ("cancelled", "cancel"), ("signalling", "signal"), ("signalled", "signal"),
        ("channelling", "channel"), ("channelled", "channel"), ("fuelling", "fuel"),
        ("fuelled", "fuel"), ("levelling", "level"), ("levelled", "level"),
        ("totalling", "total"), ("totalled", "total"), ("patrolling", "patrol"),
        ("patrolled", "patrol"), ("compelling", "compel"), ("compelled", "compel"),
        ("propelling", "propel"), ("propelled", "propel"), ("excelling", "excel"),
        ("excelled", "excel"), ("focusing", "focus"), ("focused", "focus"),
        ("focussing", "focus"), ("focussed", "focus"), ("biased", "bias"),
    ])
});

/// Base verbs ending in `-eed` that are not past tenses.
pub static EED_BASES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "need", "proceed", "exceed", "succeed", "feed", "speed", "breed", "bleed", "heed",
        "seed", "weed", "deed", "greed", "steed", "indeed", "reed", "creed",
    ])
});

/// Stems that take no final `e` even though a heuristic would add one.
pub static NO_E_STEMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "hang", "bang", "clang", "twang", "gang", "belong", "prolong", "long", "focus", "bias",
        "canvas", "gas", "bus", "open", "happen", "listen", "visit", "edit", "limit", "exhibit",
        "inhibit", "profit", "benefit", "credit", "deposit", "audit", "vomit", "debug", "plug",
        "hug", "dig", "beg", "log", "lag", "tag", "flag", "drag", "blog", "vlog", "jog",
    ])
});

/// Base verbs ending in `-e` whose stems the heuristics cannot restore.
pub static E_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "explore", "restore", "ignore", "store", "score", "bore", "adore", "implore", "deplore",
        "snore", "core", "interfere", "adhere", "cohere", "persevere", "revere", "compete",
        "complete", "delete", "deplete", "secrete", "concrete", "retrieve", "achieve",
        "believe", "relieve", "perceive", "receive", "conceive", "deceive", "leverage",
        "manage", "engage", "encourage", "leave", "average", "damage", "message", "package",
        "arrange", "change", "exchange", "challenge", "range", "combine", "define",
        "determine", "examine", "refine", "outline", "imagine", "undermine", "decline",
        "incline", "pipeline", "streamline", "baseline", "guide", "provide", "decide",
        "divide", "include", "conclude", "exclude", "precede", "concede", "recede", "supersede",
        "encode", "decode", "explode", "erode", "corrode", "persuade", "invade", "evade",
        "degrade", "upgrade", "trade", "cascade", "dictate", "require", "acquire", "inquire",
        "desire", "expire", "inspire", "admire", "aspire", "retire", "hire", "fire", "wire",
        "tire", "compare", "declare", "prepare", "share", "care", "dare", "stare", "spare",
        "scare", "ensure", "measure", "capture", "structure", "feature", "configure", "figure",
        "procure", "secure", "endure", "insure", "assure", "venture", "cure", "lure", "pure",
        "use", "reuse", "cause", "pause", "refuse", "confuse", "amuse", "abuse", "accuse",
        "diffuse", "infuse", "excuse", "fuse", "raise", "praise", "advise", "revise", "devise",
        "supervise", "comprise", "surprise", "exercise", "promise", "compromise", "propose",
        "compose", "expose", "impose", "suppose", "oppose", "close", "dispose", "diagnose",
        "choose", "lose", "increase", "release", "decrease", "please", "cease", "lease",
        "cleanse", "analyse", "paralyse", "emphasise", "organise", "recognise", "realise",
        "utilise", "optimise", "minimise", "maximise", "summarise", "categorise",
        "prioritise", "characterise", "visualise", "standardise", "normalise", "generalise",
        "personalise", "customise", "digitalise", "authorise", "emerge", "merge", "converge",
        "diverge", "urge", "purge", "judge", "acknowledge", "bulge", "indulge", "continue",
        "argue", "pursue", "issue", "value", "queue", "rescue", "produce", "reduce",
        "introduce", "induce", "deduce", "enforce", "reinforce", "influence", "balance",
        "experience", "place", "replace", "trace", "source", "force", "enhance", "advance",
        "notice", "service", "practice", "pronounce", "announce", "evidence", "reference",
        "surface", "interface", "face", "space", "embrace", "create", "generate", "evaluate",
        "integrate", "estimate", "automate", "validate", "update", "locate", "simulate",
        "formulate", "communicate", "investigate", "demonstrate", "illustrate", "translate",
        "operate", "motivate", "indicate", "associate", "facilitate", "aggregate", "calibrate",
        "accumulate", "allocate", "incorporate", "enable", "handle", "sample", "couple",
        "tackle", "settle", "bundle", "struggle", "cycle", "recycle", "scale",
        "solve", "move", "improve", "serve", "derive", "drive", "involve", "observe",
        "preserve", "reserve", "conserve", "deserve", "resolve", "evolve", "revolve",
        "remove", "approve", "prove", "save", "curve", "carve", "starve", "compute", "execute",
        "distribute", "contribute", "attribute", "constitute", "substitute", "dilute",
        "pollute", "salute", "describe", "subscribe", "prescribe", "inscribe", "transcribe",
        "escape", "shape", "type", "hope", "cope", "pipe", "wipe", "time", "name", "frame",
        "assume", "consume", "resume", "presume", "live", "give", "have", "make", "take",
        "write", "rule", "code", "vote", "note", "quote", "promote", "date", "state", "rate",
        "invite", "cite", "excite", "unite", "ignite", "site", "style", "smile", "compile",
        "reconcile", "profile", "file", "tile", "behave", "pave", "wave",
        "centre", "agree", "see", "free", "guarantee", "decree", "oversee",
        "emancipate", "participate", "anticipate", "dominate", "eliminate", "discriminate",
        "originate", "terminate", "coordinate", "illuminate", "nominate", "contaminate",
        "alienate", "differentiate", "negotiate", "initiate", "mediate", "appreciate",
        "deviate", "alleviate", "abbreviate", "obviate", "innovate", "elevate", "cultivate",
        "activate", "captivate", "renovate", "navigate", "mitigate", "propagate",
        "interrogate", "instigate", "delegate", "relegate", "segregate", "educate",
        "complicate", "duplicate", "fabricate", "replicate", "dedicate", "advocate",
        "eradicate", "authenticate", "vindicate", "predicate", "adjudicate", "rise", "arise",
        "sense", "license", "dose", "pose", "base", "chase", "purchase", "phase", "erase",
        "browse", "house", "nurse", "reverse", "traverse", "disperse", "immerse", "collapse",
        "endorse", "parse", "condense",
    ])
});

/// Irregular comparatives and superlatives.
pub static ADJ_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    map(&[
        ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
        ("farther", "far"), ("farthest", "far"), ("further", "far"), ("furthest", "far"),
        ("elder", "old"), ("eldest", "old"), ("lesser", "less"), ("least", "less"),
    ])
});

/// Irregular adverb forms.
pub static ADV_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    map(&[
        ("best", "well"), ("better", "well"), ("deeper", "deeply"), ("farther", "far"),
        ("further", "far"), ("harder", "hard"), ("hardest", "hard"),
    ])
});

/// Adjectives with regular comparative and superlative forms.
pub static COMPARABLE_ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "large", "small", "high", "low", "fast", "slow", "great", "strong", "weak", "wide",
        "deep", "long", "short", "new", "old", "young", "simple", "close", "late", "early",
        "easy", "hard", "rich", "poor", "cheap", "safe", "clear", "fine", "pure", "rare",
        "tight", "loose", "broad", "narrow", "quick", "bright", "dark", "dense", "sparse",
        "smart", "fair", "full", "light", "heavy", "busy", "fresh", "rough", "smooth", "soft",
        "steep", "sharp", "tall", "thick", "thin", "warm", "cold", "cool", "hot", "big", "wet",
        "flat", "fit", "sad", "mad", "few", "near", "nice", "wise", "true", "brave", "tiny",
        "happy", "lucky", "noisy", "costly", "likely", "healthy", "wealthy", "sound", "calm",
        "fierce", "keen", "mild", "plain", "proud", "quiet", "slim", "vast", "wild",
    ])
});

/// Closed-class words and their Penn Treebank tags.
pub static CLOSED_CLASS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    map(&[
        ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
        ("these", "DT"), ("those", "DT"), ("each", "DT"), ("every", "DT"), ("either", "DT"),
        ("neither", "DT"), ("another", "DT"), ("some", "DT"), ("any", "DT"), ("no", "DT"),
        ("all", "PDT"), ("both", "PDT"), ("half", "PDT"), ("of", "IN"), ("in", "IN"),
        ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"), ("with", "IN"),
        ("from", "IN"), ("into", "IN"), ("onto", "IN"), ("upon", "IN"), ("about", "IN"),
        ("across", "IN"), ("against", "IN"), ("along", "IN"), ("among", "IN"),
        ("amongst", "IN"), ("around", "IN"), ("before", "IN"), ("behind", "IN"),
        ("below", "IN"), ("beneath", "IN"), ("beside", "IN"), ("besides", "IN"),
        ("between", "IN"), ("beyond", "IN"), ("despite", "IN"), ("during", "IN"),
        ("except", "IN"), ("inside", "IN"), ("outside", "IN"), ("through", "IN"),
        ("throughout", "IN"), ("toward", "IN"), ("towards", "IN"), ("under", "IN"),
        ("underneath", "IN"), ("unlike", "IN"), ("until", "IN"), ("via", "IN"),
        ("within", "IN"), ("without", "IN"), ("whereas", "IN"), ("whether", "IN"),
        ("although", "IN"), ("though", "IN"), ("because", "IN"), ("unless", "IN"),
        ("since", "IN"), ("while", "IN"), ("if", "IN"), ("per", "IN"), ("than", "IN"),
        ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
        ("plus", "CC"), ("to", "TO"), ("can", "MD"), ("could", "MD"), ("may", "MD"),
        ("might", "MD"), ("must", "MD"), ("shall", "MD"), ("should", "MD"), ("will", "MD"),
        ("would", "MD"), ("i", "PRP"), ("me", "PRP"), ("we", "PRP"), ("us", "PRP"),
        ("you", "PRP"), ("he", "PRP"), ("him", "PRP"), ("she", "PRP"), ("it", "PRP"),
        ("they", "PRP"), ("them", "PRP"), ("my", "PRP$"), ("our", "PRP$"), ("your", "PRP$"),
        ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"), ("their", "PRP$"),
        ("which", "WDT"), ("what", "WP"), ("who", "WP"), ("whom", "WP"), ("whose", "WP$"),
        ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"), ("there", "EX"),
        ("oh", "UH"), ("yes", "UH"), ("one", "CD"), ("two", "CD"), ("three", "CD"),
        ("four", "CD"), ("five", "CD"), ("six", "CD"), ("seven", "CD"), ("eight", "CD"),
        ("nine", "CD"), ("ten", "CD"), ("hundred", "CD"), ("thousand", "CD"),
        ("million", "CD"), ("billion", "CD"),
    ])
});

/// Adverbs that do not end in `-ly`.
pub static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "also", "often", "well", "still", "even", "almost", "already", "always", "never",
        "soon", "together", "however", "therefore", "thus", "hence", "rather", "quite",
        "perhaps", "ever", "indeed", "moreover", "furthermore", "nevertheless", "nonetheless",
        "instead", "otherwise", "away", "back", "sometimes", "afterwards", "meanwhile",
        "likewise", "else", "anyway", "somewhat", "forward", "ahead", "abroad", "online",
        "offline", "overall", "notably", "very", "too", "again", "once", "here", "now",
        "then", "just", "only", "so", "not",
    ])
});

/// Adjectives not caught by suffix rules.
pub static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "new", "good", "bad", "high", "low", "large", "big", "small", "long", "short", "old",
        "young", "great", "little", "real", "open", "free", "full", "whole", "main", "major",
        "minor", "deep", "wide", "rich", "poor", "strong", "weak", "fast", "slow", "hard",
        "easy", "simple", "complex", "different", "important", "efficient", "significant",
        "relevant", "recent", "current", "sufficient", "independent", "consistent",
        "intelligent", "dependent", "frequent", "excellent", "apparent", "prominent",
        "evident", "inherent", "robust", "smart", "novel", "similar", "particular", "popular",
        "regular", "modular", "nuclear", "linear", "nonlinear", "circular", "cellular",
        "molecular", "clear", "proper", "accurate", "adequate", "appropriate", "separate",
        "private", "moderate", "complete", "extreme", "secure", "mature", "obscure", "sparse",
        "dense", "diverse", "adverse", "intense", "immense", "precise", "concise", "latent",
        "immediate", "ultimate", "legitimate", "upper", "inner", "outer", "former", "latter",
        "other", "many", "much", "several", "various", "own", "same", "such", "few", "fewer",
        "unique", "common", "certain", "early", "late", "likely", "unlikely", "daily",
        "weekly", "monthly", "yearly", "costly", "friendly", "elderly", "timely", "lonely",
        "lovely", "ugly", "holy", "silly", "scholarly", "orderly", "able", "due", "key",
        "true", "false", "safe", "fair", "quick", "sharp", "rough", "smooth", "soft", "warm",
        "cold", "hot", "cool", "dark", "bright", "light", "heavy", "thin", "thick", "tall",
        "vast", "wild", "calm", "keen", "mild", "plain", "proud", "quiet", "slim", "fresh",
        "cheap", "broad", "narrow", "tight", "loose", "rare", "fine", "pure", "wise", "nice",
        "brave", "tiny", "happy", "lucky", "busy", "fit", "flat", "wet", "sad", "near",
        "close", "far", "sound", "human", "urban", "rural", "global", "local", "digital",
        "mobile", "public", "academic", "green", "blue", "red", "black", "white",
    ])
});

/// `-ly` words that are not adverbs.
pub static LY_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "family", "supply", "assembly", "anomaly", "ally", "italy", "rally", "bully", "belly",
        "jelly", "lily", "july", "monopoly", "melancholy", "reply", "fly", "butterfly",
        "oligopoly", "homily", "folly", "gully", "tally", "doily",
    ])
});

pub static LY_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&["apply", "comply", "multiply", "rely", "imply", "ply", "sally", "dally"])
});

/// `-ing` words that are nouns rather than gerunds.
pub static ING_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "morning", "evening", "ceiling", "pudding", "wedding", "nothing", "something",
        "anything", "everything", "sibling", "darling", "herring", "viking", "earring",
        "offspring", "lightning", "cunning", "awning", "farthing", "shilling", "pfennig",
        "during", "icing", "ring", "wing", "swing", "king", "sing", "bring", "thing",
        "string", "spring", "sting", "sling", "cling", "fling", "wring",
    ])
});

/// `-ing` heads read as nouns when they follow a noun or adjective
/// ("machine learning", "data mining").
pub static ING_COMPOUND_HEADS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "learning", "mining", "computing", "processing", "modeling", "modelling",
        "engineering", "programming", "networking", "marketing", "banking", "manufacturing",
        "training", "testing", "clustering", "forecasting", "planning", "scheduling",
        "reasoning", "understanding", "tracking", "sensing", "monitoring", "reporting",
        "accounting", "housing", "nursing", "building", "funding", "teaching", "recycling",
        "crowdsourcing", "outsourcing", "offloading", "caching", "hashing", "parsing",
        "tagging", "labeling", "labelling", "filtering", "ranking", "matching", "retrieval",
        "indexing", "shipping", "shopping", "gaming", "streaming", "sharing",
    ])
});

/// `-al` / `-ic` words that are nouns.
pub static SUFFIX_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "proposal", "approval", "signal", "journal", "portal", "arrival", "rental", "removal",
        "survival", "tutorial", "manual", "hospital", "capital", "animal", "crystal",
        "festival", "interval", "metal", "pedal", "referral", "trial", "renewal",
        "withdrawal", "dismissal", "rival", "terminal", "criminal", "material", "individual",
        "potential", "professional", "principal", "total", "general", "official",
        "denial", "retrieval", "disposal", "appraisal", "rehearsal", "reversal", "topic",
        "logic", "music", "traffic", "clinic", "republic", "fabric", "graphic", "mechanic",
        "panic", "picnic", "arithmetic", "rhetoric", "metric", "lyric", "critic", "tactic",
        "comic", "epidemic", "pandemic", "relic", "mimic", "heuristic", "characteristic",
    ])
});
