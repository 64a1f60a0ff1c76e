//! LaTeX command to Unicode symbol table
//!
//! Keys are command names without the leading backslash. A handful of keys
//! spell multi-command idioms (`dot\cup`, `overset{?}{=}`); the tokenizer
//! recognizes those through [`MATH_IDIOMS`] before splitting commands.

use phf::phf_map;

/// Command name to Unicode rendering
pub static MATH_SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    "AC" => "∿",
    "APLcomment" => "⍝",
    "APLdownarrowbox" => "⍗",
    "APLinput" => "⍞",
    "APLinv" => "⌹",
    "APLleftarrowbox" => "⍇",
    "APLlog" => "⍟",
    "APLrightarrowbox" => "⍈",
    "APLuparrowbox" => "⍐",
    "Angstroem" => "Å",
    "Bot" => "⫫",
    "Box" => "□",
    "Bumpeq" => "≎",
    "CIRCLE" => "●",
    "Cap" => "⋒",
    "CapitalDifferentialD" => "ⅅ",
    "CheckedBox" => "☑",
    "Circle" => "○",
    "Coloneqq" => "⩴",
    "ComplexI" => "ⅈ",
    "ComplexJ" => "ⅉ",
    "Cup" => "⋓",
    "Delta" => "Δ",
    "Diamond" => "◇",
    "Diamondblack" => "◆",
    "Diamonddot" => "⟐",
    "DifferentialD" => "ⅆ",
    "Digamma" => "Ϝ",
    "Doteq" => "≑",
    "DownArrowBar" => "⤓",
    "DownLeftTeeVector" => "⥞",
    "DownLeftVectorBar" => "⥖",
    "DownRightTeeVector" => "⥟",
    "DownRightVectorBar" => "⥗",
    "Downarrow" => "⇓",
    "Equal" => "⩵",
    "Euler" => "Ɛ",
    "ExponentialE" => "ⅇ",
    "ExponetialE" => "ⅇ",
    "Finv" => "Ⅎ",
    "Gamma" => "Γ",
    "Im" => "ℑ",
    "Join" => "⨝",
    "Koppa" => "Ϟ",
    "LEFTCIRCLE" => "◖",
    "LEFTcircle" => "◐",
    "LHD" => "◀",
    "LVec" => "x\u{20d6}",
    "Lambda" => "Λ",
    "Lbag" => "⟅",
    "LeftArrowBar" => "⇤",
    "LeftDownTeeVector" => "⥡",
    "LeftDownVectorBar" => "⥙",
    "LeftTeeVector" => "⥚",
    "LeftTriangleBar" => "⧏",
    "LeftUpTeeVector" => "⥠",
    "LeftUpVectorBar" => "⥘",
    "LeftVectorBar" => "⥒",
    "Leftarrow" => "⇐",
    "Leftrightarrow" => "⇔",
    "Lleftarrow" => "⇚",
    "Longleftarrow" => "⟸",
    "Longleftrightarrow" => "⟺",
    "Longmapsfrom" => "⟽",
    "Longmapsto" => "⟾",
    "Longrightarrow" => "⟹",
    "Lparen" => "⦅",
    "Lsh" => "↰",
    "MapsDown" => "↧",
    "MapsUp" => "↥",
    "Mapsfrom" => "⤆",
    "Mapsto" => "⤇",
    "Micro" => "µ",
    "Nearrow" => "⇗",
    "NestedGreaterGreater" => "⪢",
    "NestedLessLess" => "⪡",
    "NotGreaterLess" => "≹",
    "NotGreaterTilde" => "≵",
    "NotLessTilde" => "≴",
    "Nwarrow" => "⇖",
    "Omega" => "Ω",
    "Phi" => "Φ",
    "Pi" => "Π",
    "Proportion" => "∷",
    "Psi" => "Ψ",
    "Qoppa" => "Ϙ",
    "RHD" => "▶",
    "RIGHTCIRCLE" => "◗",
    "RIGHTcircle" => "◑",
    "Rbag" => "⟆",
    "Re" => "ℜ",
    "RightArrowBar" => "⇥",
    "RightDownTeeVector" => "⥝",
    "RightDownVectorBar" => "⥕",
    "RightTeeVector" => "⥛",
    "RightTriangleBar" => "⧐",
    "RightUpTeeVector" => "⥜",
    "RightUpVectorBar" => "⥔",
    "RightVectorBar" => "⥓",
    "Rightarrow" => "⇒",
    "Rparen" => "⦆",
    "Rrightarrow" => "⇛",
    "Rsh" => "↱",
    "S" => "§",
    "Same" => "⩶",
    "Sampi" => "Ϡ",
    "Searrow" => "⇘",
    "Sigma" => "Σ",
    "Square" => "☐",
    "Stigma" => "Ϛ",
    "Subset" => "⋐",
    "Sun" => "☉",
    "Supset" => "⋑",
    "Swarrow" => "⇙",
    "Theta" => "Θ",
    "Top" => "⫪",
    "UpArrowBar" => "⤒",
    "Uparrow" => "⇑",
    "Updownarrow" => "⇕",
    "Upsilon" => "Υ",
    "VDash" => "⊫",
    "VERT" => "⦀",
    "Vdash" => "⊩",
    "Vert" => "‖",
    "Vvdash" => "⊪",
    "XBox" => "☒",
    "Xi" => "Ξ",
    "Yup" => "⅄",
    "_" => "_",
    "aleph" => "א",
    "alpha" => "α",
    "amalg" => "⨿",
    "anchor" => "⚓",
    "angle" => "∠",
    "approx" => "≈",
    "approxeq" => "≊",
    "aquarius" => "♒",
    "arg" => "arg",
    "aries" => "♈",
    "arrowbullet" => "➢",
    "ast" => "∗",
    "asymp" => "≍",
    "backepsilon" => "϶",
    "backprime" => "‵",
    "backsim" => "∽",
    "backsimeq" => "⋍",
    "backslash" => "",
    "ballotx" => "✗",
    "barin" => "⋶",
    "barleftharpoon" => "⥫",
    "barrightharpoon" => "⥭",
    "barwedge" => "⊼",
    "because" => "∵",
    "beta" => "β",
    "beth" => "ב",
    "between" => "≬",
    "bigcap" => "∩",
    "bigcup" => "∪",
    "biginterleave" => "⫼",
    "bigodot" => "⨀",
    "bigoplus" => "⨁",
    "bigotimes" => "⨂",
    "bigsqcap" => "⨅",
    "bigsqcup" => "⨆",
    "bigstar" => "★",
    "bigtriangledown" => "▽",
    "bigtriangleup" => "△",
    "biguplus" => "⨄",
    "bigvee" => "∨",
    "bigwedge" => "∧",
    "bij" => "⤖",
    "biohazard" => "☣",
    "blacklozenge" => "⧫",
    "blacksmiley" => "☻",
    "blacksquare" => "■",
    "blacktriangledown" => "▾",
    "blacktriangleleft" => "◂",
    "blacktriangleright" => "▸",
    "blacktriangleup" => "▴",
    "bot" => "⊥",
    "bowtie" => "⋈",
    "boxast" => "⧆",
    "boxbar" => "◫",
    "boxbox" => "⧈",
    "boxbslash" => "⧅",
    "boxcircle" => "⧇",
    "boxdot" => "⊡",
    "boxminus" => "⊟",
    "boxplus" => "⊞",
    "boxslash" => "⧄",
    "boxtimes" => "⊠",
    "bullet" => "•",
    "bumpeq" => "≏",
    "cancer" => "♋",
    "cap" => "∩",
    "capricornus" => "♑",
    "capwedge" => "⩄",
    "cat" => "⁀",
    "cdot" => "·",
    "cdots" => "⋯",
    "cent" => "¢",
    "checkmark" => "✓",
    "chi" => "χ",
    "circ" => "∘",
    "circeq" => "≗",
    "circlearrowleft" => "↺",
    "circlearrowright" => "↻",
    "circledR" => "®",
    "circledast" => "⊛",
    "circledbslash" => "⦸",
    "circledcirc" => "⊚",
    "circleddash" => "⊝",
    "circledgtr" => "⧁",
    "circledless" => "⧀",
    "clubsuit" => "♣",
    "colon" => ":",
    "coloneq" => "≔",
    "complement" => "∁",
    "cong" => "≅",
    "coprod" => "∐",
    "corresponds" => "≙",
    "cup" => "∪",
    "curlyeqprec" => "⋞",
    "curlyeqsucc" => "⋟",
    "curlyvee" => "⋎",
    "curlywedge" => "⋏",
    "curvearrowleft" => "↶",
    "curvearrowright" => "↷",
    "dagger" => "†",
    "daleth" => "ד",
    "dashleftarrow" => "⇠",
    "dashrightarrow" => "⇢",
    "dashv" => "⊣",
    "ddagger" => "‡",
    "delta" => "δ",
    "diameter" => "∅",
    "diamond" => "⋄",
    "diamondsuit" => "♢",
    "digamma" => "ϝ",
    "div" => "÷",
    "divideontimes" => "⋇",
    "dlsh" => "↲",
    "dot\\bigvee" => "⩒",
    "dot\\cap" => "⩀",
    "dot\\cup" => "⊍",
    "dot\\lor" => "⩒",
    "dot\\vee" => "⩒",
    "doteq" => "≐",
    "dotplus" => "∔",
    "dots" => "…",
    "doublebarwedge" => "⩞",
    "downarrow" => "↓",
    "downdownarrows" => "⇊",
    "downdownharpoons" => "⥥",
    "downharpoonleft" => "⇃",
    "downharpoonright" => "⇂",
    "downuparrows" => "⇵",
    "downupharpoons" => "⥯",
    "drsh" => "↳",
    "dsub" => "⩤",
    "earth" => "♁",
    "eighthnote" => "♪",
    "ell" => "ℓ",
    "emptyset" => "∅",
    "epsilon" => "ϵ",
    "eqcirc" => "≖",
    "eqcolon" => "∹",
    "eqsim" => "≂",
    "eqslantgtr" => "⪖",
    "eqslantless" => "⪕",
    "equiv" => "≡",
    "eta" => "η",
    "eth" => "ð",
    "exists" => "∃",
    "fallingdotseq" => "≒",
    "fcmp" => "⨾",
    "female" => "♀",
    "ffun" => "⇻",
    "finj" => "⤕",
    "fint" => "⨏",
    "flat" => "♭",
    "footnotesize" => "",
    "forall" => "∀",
    "fourth" => "⁗",
    "frown" => "⌢",
    "frownie" => "☹",
    "gamma" => "γ",
    "ge" => ">",
    "gemini" => "♊",
    "geq" => "≥",
    "geqq" => "≧",
    "geqslant" => "⩾",
    "gg" => "≫",
    "ggcurly" => "⪼",
    "ggg" => "⋙",
    "gimel" => "ג",
    "gnapprox" => "⪊",
    "gneq" => "⪈",
    "gneqq" => "≩",
    "gnsim" => "⋧",
    "gtrapprox" => "⪆",
    "gtrdot" => "⋗",
    "gtreqless" => "⋛",
    "gtreqqless" => "⪌",
    "gtrless" => "≷",
    "gtrsim" => "≳",
    "hash" => "⋕",
    "heartsuit" => "♡",
    "hookleftarrow" => "↩",
    "hookrightarrow" => "↪",
    "hslash" => "ℏ",
    "iddots" => "⋰",
    "iff" => "⟺",
    "iiiint" => "⨌",
    "iiint" => "∭",
    "iint" => "∬",
    "imath" => "ı",
    "implies" => "⟹",
    "in" => "∈",
    "infty" => "∞",
    "int" => "∫",
    "intercal" => "⊺",
    "interleave" => "⫴",
    "invamp" => "⅋",
    "invdiameter" => "⍉",
    "invneg" => "⌐",
    "iota" => "ι",
    "jmath" => "ȷ",
    "jupiter" => "♃",
    "kappa" => "κ",
    "koppa" => "ϟ",
    "lambda" => "λ",
    "land" => "∧",
    "lang" => "⟪",
    "langle" => "⟨",
    "large" => "",
    "lblot" => "⦉",
    "lbrace" => "{",
    "lbrack" => "[",
    "lceil" => "⌈",
    "ldots" => "…",
    "le" => "<",
    "leadsto" => "⤳",
    "leftarrow" => "←",
    "leftarrowtail" => "↢",
    "leftarrowtriangle" => "⇽",
    "leftbarharpoon" => "⥪",
    "leftharpoondown" => "↽",
    "leftharpoonup" => "↼",
    "leftleftarrows" => "⇇",
    "leftleftharpoons" => "⥢",
    "leftmoon" => "☾",
    "leftrightarrow" => "↔",
    "leftrightarrows" => "⇆",
    "leftrightarrowtriangle" => "⇿",
    "leftrightharpoon" => "⥊",
    "leftrightharpoondown" => "⥐",
    "leftrightharpoons" => "⇋",
    "leftrightharpoonup" => "⥎",
    "leftrightsquigarrow" => "↭",
    "leftslice" => "⪦",
    "leftsquigarrow" => "⇜",
    "leftthreetimes" => "⋋",
    "leftupdownharpoon" => "⥑",
    "leo" => "♌",
    "leq" => "≤",
    "leqq" => "≦",
    "leqslant" => "⩽",
    "lessapprox" => "⪅",
    "lessdot" => "⋖",
    "lesseqgtr" => "⋚",
    "lesseqqgtr" => "⪋",
    "lessgtr" => "≶",
    "lessim" => "≲",
    "lesssim" => "≲",
    "lfloor" => "⌊",
    "lgroup" => "⟮",
    "lhd" => "◁",
    "libra" => "♎",
    "lightning" => "↯",
    "limg" => "⦇",
    "ll" => "≪",
    "llbracket" => "⟦",
    "llcorner" => "⌞",
    "llcurly" => "⪻",
    "lll" => "⋘",
    "lnapprox" => "⪉",
    "lneq" => "⪇",
    "lneqq" => "≨",
    "lnot" => "¬",
    "lnsim" => "⋦",
    "longleftarrow" => "⟵",
    "longleftrightarrow" => "⟷",
    "longmapsfrom" => "⟻",
    "longmapsto" => "⟼",
    "longrightarrow" => "⟶",
    "looparrowleft" => "↫",
    "looparrowright" => "↬",
    "lor" => "∨",
    "lozenge" => "◊",
    "lrcorner" => "⌟",
    "ltimes" => "⋉",
    "male" => "♂",
    "maltese" => "✠",
    "mapsfrom" => "↤",
    "mapsto" => "↦",
    "measuredangle" => "∡",
    "medbullet" => "⚫",
    "medcirc" => "⚪",
    "mercury" => "☿",
    "mho" => "℧",
    "mid" => "∣",
    "mlcp" => "⫛",
    "mod" => "\u{20}mod\u{20}",
    "models" => "⊧",
    "mp" => "∓",
    "mu" => "μ",
    "multimap" => "⊸",
    "multimapboth" => "⧟",
    "multimapdotbothA" => "⊶",
    "multimapdotbothB" => "⊷",
    "multimapinv" => "⟜",
    "nLeftarrow" => "⇍",
    "nLeftrightarrow" => "⇎",
    "nRightarrow" => "⇏",
    "nVDash" => "⊯",
    "nVdash" => "⊮",
    "nabla" => "∇",
    "napprox" => "≉",
    "natural" => "♮",
    "ncong" => "≇",
    "nearrow" => "↗",
    "neg" => "¬",
    "neptune" => "♆",
    "neq" => "≠",
    "nequiv" => "≢",
    "nexists" => "∄",
    "ngeq" => "≱",
    "ngtr" => "≯",
    "ni" => "∋",
    "nleftarrow" => "↚",
    "nleftrightarrow" => "↮",
    "nleq" => "≰",
    "nless" => "≮",
    "nmid" => "∤",
    "nni" => "∌",
    "normalsize" => "",
    "not\\in" => "∉",
    "not\\ni" => "∌",
    "not\\preceq" => "⋠",
    "not\\subset" => "⊄",
    "not\\subseteq" => "⊈",
    "not\\succeq" => "⋡",
    "not\\supset" => "⊅",
    "not\\supseteq" => "⊉",
    "not\\trianglelefteq" => "⋬",
    "not\\trianglerighteq" => "⋭",
    "not\\vartriangleleft" => "⋪",
    "not\\vartriangleright" => "⋫",
    "notasymp" => "≭",
    "notbackslash" => "⍀",
    "notin" => "∉",
    "notslash" => "⌿",
    "nparallel" => "∦",
    "nprec" => "⊀",
    "npreceq" => "⋠",
    "nrightarrow" => "↛",
    "nsim" => "≁",
    "nsimeq" => "≄",
    "nsqsubseteq" => "⋢",
    "nsqsupseteq" => "⋣",
    "nsubset" => "⊄",
    "nsubseteq" => "⊈",
    "nsucc" => "⊁",
    "nsucceq" => "⋡",
    "nsupset" => "⊅",
    "nsupseteq" => "⊉",
    "ntriangleleft" => "⋪",
    "ntrianglelefteq" => "⋬",
    "ntriangleright" => "⋫",
    "ntrianglerighteq" => "⋭",
    "nu" => "ν",
    "nvDash" => "⊭",
    "nvdash" => "⊬",
    "nwarrow" => "↖",
    "odot" => "⊙",
    "oiiint" => "∰",
    "oiint" => "∯",
    "oint" => "∮",
    "ointctrclockwise" => "∳",
    "omega" => "ω",
    "ominus" => "⊖",
    "oplus" => "⊕",
    "oslash" => "⊘",
    "otimes" => "⊗",
    "over" => "/",
    "overbrace" => "⏞",
    "overleftrightarrow" => "x\u{20e1}",
    "overparen" => "⏜",
    "overset?=" => "≟",
    "overset{?}{=}" => "≟",
    "overset{\\operatorname{def}}{=}" => "≝",
    "parallel" => "∥",
    "partial" => "∂",
    "pencil" => "✎",
    "perp" => "⊥",
    "pfun" => "⇸",
    "phi" => "ϕ",
    "pi" => "π",
    "pinj" => "⤔",
    "pisces" => "♓",
    "pitchfork" => "⋔",
    "pluto" => "♇",
    "pm" => "±",
    "pointright" => "☞",
    "pounds" => "£",
    "prec" => "≺",
    "precapprox" => "⪷",
    "preccurlyeq" => "≼",
    "preceq" => "⪯",
    "preceqq" => "⪳",
    "precnapprox" => "⪹",
    "precnsim" => "⋨",
    "precsim" => "≾",
    "prime" => "′",
    "prod" => "∏",
    "propto" => "∝",
    "psi" => "ψ",
    "psur" => "⤀",
    "qoppa" => "ϙ",
    "quad" => "\u{2001}",
    "quarternote" => "♩",
    "radiation" => "☢",
    "rang" => "⟫",
    "rangle" => "⟩",
    "rarr" => "→",
    "rblot" => "⦊",
    "rbrace" => "}",
    "rbrack" => "]",
    "rceil" => "⌉",
    "recycle" => "♻",
    "rfloor" => "⌋",
    "rgroup" => "⟯",
    "rhd" => "▷",
    "rho" => "ρ",
    "rightangle" => "∟",
    "rightarrow" => "→",
    "rightarrowtail" => "↣",
    "rightarrowtriangle" => "⇾",
    "rightbarharpoon" => "⥬",
    "rightharpoondown" => "⇁",
    "rightharpoonup" => "⇀",
    "rightleftarrows" => "⇄",
    "rightleftharpoon" => "⥋",
    "rightleftharpoons" => "⇌",
    "rightmoon" => "☽",
    "rightrightarrows" => "⇉",
    "rightrightharpoons" => "⥤",
    "rightslice" => "⪧",
    "rightsquigarrow" => "⇝",
    "rightthreetimes" => "⋌",
    "rightupdownharpoon" => "⥏",
    "rimg" => "⦈",
    "risingdotseq" => "≓",
    "rrbracket" => "⟧",
    "rsub" => "⩥",
    "rtimes" => "⋊",
    "sagittarius" => "♐",
    "sampi" => "ϡ",
    "saturn" => "♄",
    "scorpio" => "♏",
    "scriptsize" => "",
    "searrow" => "↘",
    "second" => "″",
    "setminus" => "⧵",
    "sharp" => "♯",
    "sigma" => "σ",
    "sim" => "∼",
    "simeq" => "≃",
    "sixteenthnote" => "♬",
    "skull" => "☠",
    "slash" => "∕",
    "small" => "",
    "smallsetminus" => "∖",
    "smalltriangledown" => "▿",
    "smalltriangleleft" => "◃",
    "smalltriangleright" => "▹",
    "smalltriangleup" => "▵",
    "smile" => "⌣",
    "smiley" => "☺",
    "spadesuit" => "♠",
    "spddot" => "¨",
    "sphat" => "^",
    "sphericalangle" => "∢",
    "spot" => "⦁",
    "sptilde" => "~",
    "sqcap" => "⊓",
    "sqcup" => "⊔",
    "sqint" => "⨖",
    "sqrt" => "√",
    "sqrt[3]" => "∛",
    "sqrt[4]" => "∜",
    "sqsubset" => "⊏",
    "sqsubseteq" => "⊑",
    "sqsupset" => "⊐",
    "sqsupseteq" => "⊒",
    "square" => "□",
    "sslash" => "⫽",
    "star" => "⋆",
    "steaming" => "☕",
    "stigma" => "ϛ",
    "strictfi" => "⥼",
    "strictif" => "⥽",
    "subset" => "⊂",
    "subseteq" => "⊆",
    "subseteqq" => "⫅",
    "subsetneq" => "⊊",
    "subsetneqq" => "⫋",
    "succ" => "≻",
    "succapprox" => "⪸",
    "succcurlyeq" => "≽",
    "succeq" => "⪰",
    "succeqq" => "⪴",
    "succnapprox" => "⪺",
    "succnsim" => "⋩",
    "succsim" => "≿",
    "sum" => "∑",
    "sun" => "☼",
    "supset" => "⊃",
    "supseteq" => "⊇",
    "supseteqq" => "⫆",
    "supsetneq" => "⊋",
    "supsetneqq" => "⫌",
    "swarrow" => "↙",
    "swords" => "⚔",
    "talloblong" => "⫾",
    "tau" => "τ",
    "taurus" => "♉",
    "tcohm" => "Ω",
    "textbackslash" => "\\",
    "textbar" => "|",
    "textbullet" => "•",
    "textgreater" => ">",
    "textless" => "<",
    "textprime" => "′",
    "therefore" => "∴",
    "theta" => "θ",
    "third" => "‴",
    "times" => "×",
    "tiny" => "",
    "to" => "→",
    "top" => "⊤",
    "triangle" => "∆",
    "trianglelefteq" => "⊴",
    "triangleq" => "≜",
    "trianglerighteq" => "⊵",
    "twoheadleftarrow" => "↞",
    "twoheadrightarrow" => "↠",
    "twonotes" => "♫",
    "ulcorner" => "⌜",
    "underbar" => "\u{a0}\u{331}",
    "underbrace" => "⏟",
    "underleftarrow" => "x\u{20ee}",
    "underline" => "\u{a0}\u{332}",
    "underparen" => "⏝",
    "underrightarrow" => "x\u{20ef}",
    "uparrow" => "↑",
    "updownarrow" => "↕",
    "updownarrows" => "⇅",
    "updownharpoons" => "⥮",
    "upharpoonleft" => "↿",
    "upharpoonright" => "↾",
    "uplus" => "⊎",
    "upsilon" => "υ",
    "upuparrows" => "⇈",
    "upupharpoons" => "⥣",
    "uranus" => "♅",
    "urcorner" => "⌝",
    "utilde" => "\u{a0}\u{330}",
    "vDash" => "⊨",
    "varbeta" => "β",
    "varclubsuit" => "♧",
    "vardiamondsuit" => "♦",
    "varepsilon" => "ε",
    "varheartsuit" => "♥",
    "varkappa" => "ϰ",
    "varnothing" => "∅",
    "varointclockwise" => "∲",
    "varphi" => "φ",
    "varpi" => "ϖ",
    "varprod" => "⨉",
    "varrho" => "ϱ",
    "varsigma" => "ς",
    "varspadesuit" => "♤",
    "vartheta" => "θ",
    "vartriangleleft" => "⊲",
    "vartriangleright" => "⊳",
    "vdash" => "⊢",
    "vdots" => "⋮",
    "vee" => "∨",
    "veebar" => "⊻",
    "vert" => "|",
    "virgo" => "♍",
    "warning" => "⚠",
    "wasylozenge" => "⌑",
    "wedge" => "∧",
    "widehat=" => "≙",
    "widehat{=}" => "≙",
    "wp" => "℘",
    "wr" => "≀",
    "xi" => "ξ",
    "yen" => "¥",
    "yinyang" => "☯",
    "zcmp" => "⨟",
    "zeta" => "ζ",
    "zhide" => "⧹",
    "zpipe" => "⨠",
    "zproject" => "⨡",
    "|" => "‖",
    // Spacing
    "," => " ",
    ":" => " ",
    ";" => " ",
    "!" => "",
    " " => " ",
    "\\" => " ",
    "qquad" => "\u{2001}\u{2001}",
    // Accents combine with the preceding character
    "acute" => "\u{301}",
    "bar" => "\u{304}",
    "breve" => "\u{306}",
    "check" => "\u{30c}",
    "ddddot" => "\u{20dc}",
    "dddot" => "\u{20db}",
    "ddot" => "\u{308}",
    "ddots" => "⋱",
    "dot" => "\u{307}",
    "grave" => "\u{300}",
    "hat" => "\u{302}",
    "lvec" => "\u{20d0}",
    "mathring" => "\u{30a}",
    "not" => "\u{338}",
    "overline" => "◌\u{305}",
    "tilde" => "\u{303}",
    "vec" => "\u{20d1}",
    // Sizing and style commands render as nothing
    "bigl" => "",
    "bigr" => "",
    "left" => "",
    "right" => "",
    "style" => "",
    "textstyle" => "",
    "mathrm" => "",
    "mathbf" => "",
    "mathit" => "",
    "mathsf" => "",
    "mathtt" => "",
    "boldsymbol" => "",
    "operatorname" => "",
    "displaystyle" => "",
    "scriptstyle" => "",
    "limits" => "",
    "nolimits" => "",
    "big" => "",
    "Big" => "",
    "bigg" => "",
    "Bigg" => "",
};

/// Multi-command spellings that render as one symbol, longest first so that
/// `\widehat{=}` wins over `\widehat=`. Each entry is the source text; the
/// symbol is `MATH_SYMBOLS[&entry[1..]]`.
pub static MATH_IDIOMS: &[&str] = &[
    "\\overset{\\operatorname{def}}{=}",
    "\\not\\vartriangleright",
    "\\not\\trianglerighteq",
    "\\not\\vartriangleleft",
    "\\not\\trianglelefteq",
    "\\overset{?}{=}",
    "\\not\\subseteq",
    "\\not\\supseteq",
    "\\dot\\bigvee",
    "\\not\\preceq",
    "\\not\\subset",
    "\\not\\succeq",
    "\\not\\supset",
    "\\widehat{=}",
    "\\overset?=",
    "\\widehat=",
    "\\dot\\cap",
    "\\dot\\cup",
    "\\dot\\lor",
    "\\dot\\vee",
    "\\not\\in",
    "\\not\\ni",
];

/// Look up a command name (without backslash)
pub fn lookup_symbol(name: &str) -> Option<&'static str> {
    MATH_SYMBOLS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek() {
        assert_eq!(lookup_symbol("alpha"), Some("α"));
        assert_eq!(lookup_symbol("Delta"), Some("Δ"));
    }

    #[test]
    fn test_ignored_commands_are_empty() {
        assert_eq!(lookup_symbol("left"), Some(""));
        assert_eq!(lookup_symbol("mathrm"), Some(""));
    }

    #[test]
    fn test_every_idiom_has_a_symbol() {
        for idiom in MATH_IDIOMS {
            assert!(
                lookup_symbol(&idiom[1..]).is_some(),
                "idiom without symbol: {}",
                idiom
            );
        }
    }

    #[test]
    fn test_idioms_longest_first() {
        for pair in MATH_IDIOMS.windows(2) {
            assert!(pair[0].len() >= pair[1].len(), "{:?}", pair);
        }
    }

    #[test]
    fn test_unknown() {
        assert_eq!(lookup_symbol("nosuchcommand"), None);
    }
}
