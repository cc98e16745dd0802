//! Built-in Devanagari-to-Latin rule set.
//!
//! Best-effort plain-English phonetics: consonants carry the inherent
//! vowel, virama forms suppress it, and consonant+matra clusters are
//! enumerated so longest-match segmentation resolves them in one step.
//! Conjuncts compose from the dead-consonant forms (\u{915}\u{94D}\u{937}
//! yields "ksha"); only those that misrender that way get explicit entries.

pub(super) const DEFAULT_TOML: &str = r#"
[rules]
# Independent vowels
"अ" = "a"
"आ" = "aa"
"इ" = "i"
"ई" = "ii"
"उ" = "u"
"ऊ" = "uu"
"ऋ" = "ri"
"ए" = "e"
"ऐ" = "ai"
"ओ" = "o"
"औ" = "au"
"ऍ" = "e"
"ऑ" = "o"

# Consonants: the bare form carries the inherent vowel, the virama
# form is the dead consonant, matra forms replace the inherent vowel.
# Nukta consonants appear both decomposed (base + U+093C) and
# precomposed (U+0958..U+095F); no normalization happens at lookup.
"क" = "ka"
"क्" = "k"
"का" = "kaa"
"कि" = "ki"
"की" = "kii"
"कु" = "ku"
"कू" = "kuu"
"कृ" = "kri"
"के" = "ke"
"कै" = "kai"
"को" = "ko"
"कौ" = "kau"
"कॉ" = "ko"

"ख" = "kha"
"ख्" = "kh"
"खा" = "khaa"
"खि" = "khi"
"खी" = "khii"
"खु" = "khu"
"खू" = "khuu"
"खृ" = "khri"
"खे" = "khe"
"खै" = "khai"
"खो" = "kho"
"खौ" = "khau"
"खॉ" = "kho"

"ग" = "ga"
"ग्" = "g"
"गा" = "gaa"
"गि" = "gi"
"गी" = "gii"
"गु" = "gu"
"गू" = "guu"
"गृ" = "gri"
"गे" = "ge"
"गै" = "gai"
"गो" = "go"
"गौ" = "gau"
"गॉ" = "go"

"घ" = "gha"
"घ्" = "gh"
"घा" = "ghaa"
"घि" = "ghi"
"घी" = "ghii"
"घु" = "ghu"
"घू" = "ghuu"
"घृ" = "ghri"
"घे" = "ghe"
"घै" = "ghai"
"घो" = "gho"
"घौ" = "ghau"
"घॉ" = "gho"

"ङ" = "na"
"ङ्" = "n"
"ङा" = "naa"
"ङि" = "ni"
"ङी" = "nii"
"ङु" = "nu"
"ङू" = "nuu"
"ङृ" = "nri"
"ङे" = "ne"
"ङै" = "nai"
"ङो" = "no"
"ङौ" = "nau"
"ङॉ" = "no"

"च" = "cha"
"च्" = "ch"
"चा" = "chaa"
"चि" = "chi"
"ची" = "chii"
"चु" = "chu"
"चू" = "chuu"
"चृ" = "chri"
"चे" = "che"
"चै" = "chai"
"चो" = "cho"
"चौ" = "chau"
"चॉ" = "cho"

"छ" = "chha"
"छ्" = "chh"
"छा" = "chhaa"
"छि" = "chhi"
"छी" = "chhii"
"छु" = "chhu"
"छू" = "chhuu"
"छृ" = "chhri"
"छे" = "chhe"
"छै" = "chhai"
"छो" = "chho"
"छौ" = "chhau"
"छॉ" = "chho"

"ज" = "ja"
"ज्" = "j"
"जा" = "jaa"
"जि" = "ji"
"जी" = "jii"
"जु" = "ju"
"जू" = "juu"
"जृ" = "jri"
"जे" = "je"
"जै" = "jai"
"जो" = "jo"
"जौ" = "jau"
"जॉ" = "jo"

"झ" = "jha"
"झ्" = "jh"
"झा" = "jhaa"
"झि" = "jhi"
"झी" = "jhii"
"झु" = "jhu"
"झू" = "jhuu"
"झृ" = "jhri"
"झे" = "jhe"
"झै" = "jhai"
"झो" = "jho"
"झौ" = "jhau"
"झॉ" = "jho"

"ञ" = "na"
"ञ्" = "n"
"ञा" = "naa"
"ञि" = "ni"
"ञी" = "nii"
"ञु" = "nu"
"ञू" = "nuu"
"ञृ" = "nri"
"ञे" = "ne"
"ञै" = "nai"
"ञो" = "no"
"ञौ" = "nau"
"ञॉ" = "no"

"ट" = "ta"
"ट्" = "t"
"टा" = "taa"
"टि" = "ti"
"टी" = "tii"
"टु" = "tu"
"टू" = "tuu"
"टृ" = "tri"
"टे" = "te"
"टै" = "tai"
"टो" = "to"
"टौ" = "tau"
"टॉ" = "to"

"ठ" = "tha"
"ठ्" = "th"
"ठा" = "thaa"
"ठि" = "thi"
"ठी" = "thii"
"ठु" = "thu"
"ठू" = "thuu"
"ठृ" = "thri"
"ठे" = "the"
"ठै" = "thai"
"ठो" = "tho"
"ठौ" = "thau"
"ठॉ" = "tho"

"ड" = "da"
"ड्" = "d"
"डा" = "daa"
"डि" = "di"
"डी" = "dii"
"डु" = "du"
"डू" = "duu"
"डृ" = "dri"
"डे" = "de"
"डै" = "dai"
"डो" = "do"
"डौ" = "dau"
"डॉ" = "do"

"ढ" = "dha"
"ढ्" = "dh"
"ढा" = "dhaa"
"ढि" = "dhi"
"ढी" = "dhii"
"ढु" = "dhu"
"ढू" = "dhuu"
"ढृ" = "dhri"
"ढे" = "dhe"
"ढै" = "dhai"
"ढो" = "dho"
"ढौ" = "dhau"
"ढॉ" = "dho"

"ण" = "na"
"ण्" = "n"
"णा" = "naa"
"णि" = "ni"
"णी" = "nii"
"णु" = "nu"
"णू" = "nuu"
"णृ" = "nri"
"णे" = "ne"
"णै" = "nai"
"णो" = "no"
"णौ" = "nau"
"णॉ" = "no"

"त" = "ta"
"त्" = "t"
"ता" = "taa"
"ति" = "ti"
"ती" = "tii"
"तु" = "tu"
"तू" = "tuu"
"तृ" = "tri"
"ते" = "te"
"तै" = "tai"
"तो" = "to"
"तौ" = "tau"
"तॉ" = "to"

"थ" = "tha"
"थ्" = "th"
"था" = "thaa"
"थि" = "thi"
"थी" = "thii"
"थु" = "thu"
"थू" = "thuu"
"थृ" = "thri"
"थे" = "the"
"थै" = "thai"
"थो" = "tho"
"थौ" = "thau"
"थॉ" = "tho"

"द" = "da"
"द्" = "d"
"दा" = "daa"
"दि" = "di"
"दी" = "dii"
"दु" = "du"
"दू" = "duu"
"दृ" = "dri"
"दे" = "de"
"दै" = "dai"
"दो" = "do"
"दौ" = "dau"
"दॉ" = "do"

"ध" = "dha"
"ध्" = "dh"
"धा" = "dhaa"
"धि" = "dhi"
"धी" = "dhii"
"धु" = "dhu"
"धू" = "dhuu"
"धृ" = "dhri"
"धे" = "dhe"
"धै" = "dhai"
"धो" = "dho"
"धौ" = "dhau"
"धॉ" = "dho"

"न" = "na"
"न्" = "n"
"ना" = "naa"
"नि" = "ni"
"नी" = "nii"
"नु" = "nu"
"नू" = "nuu"
"नृ" = "nri"
"ने" = "ne"
"नै" = "nai"
"नो" = "no"
"नौ" = "nau"
"नॉ" = "no"

"प" = "pa"
"प्" = "p"
"पा" = "paa"
"पि" = "pi"
"पी" = "pii"
"पु" = "pu"
"पू" = "puu"
"पृ" = "pri"
"पे" = "pe"
"पै" = "pai"
"पो" = "po"
"पौ" = "pau"
"पॉ" = "po"

"फ" = "pha"
"फ्" = "ph"
"फा" = "phaa"
"फि" = "phi"
"फी" = "phii"
"फु" = "phu"
"फू" = "phuu"
"फृ" = "phri"
"फे" = "phe"
"फै" = "phai"
"फो" = "pho"
"फौ" = "phau"
"फॉ" = "pho"

"ब" = "ba"
"ब्" = "b"
"बा" = "baa"
"बि" = "bi"
"बी" = "bii"
"बु" = "bu"
"बू" = "buu"
"बृ" = "bri"
"बे" = "be"
"बै" = "bai"
"बो" = "bo"
"बौ" = "bau"
"बॉ" = "bo"

"भ" = "bha"
"भ्" = "bh"
"भा" = "bhaa"
"भि" = "bhi"
"भी" = "bhii"
"भु" = "bhu"
"भू" = "bhuu"
"भृ" = "bhri"
"भे" = "bhe"
"भै" = "bhai"
"भो" = "bho"
"भौ" = "bhau"
"भॉ" = "bho"

"म" = "ma"
"म्" = "m"
"मा" = "maa"
"मि" = "mi"
"मी" = "mii"
"मु" = "mu"
"मू" = "muu"
"मृ" = "mri"
"मे" = "me"
"मै" = "mai"
"मो" = "mo"
"मौ" = "mau"
"मॉ" = "mo"

"य" = "ya"
"य्" = "y"
"या" = "yaa"
"यि" = "yi"
"यी" = "yii"
"यु" = "yu"
"यू" = "yuu"
"यृ" = "yri"
"ये" = "ye"
"यै" = "yai"
"यो" = "yo"
"यौ" = "yau"
"यॉ" = "yo"

"र" = "ra"
"र्" = "r"
"रा" = "raa"
"रि" = "ri"
"री" = "rii"
"रु" = "ru"
"रू" = "ruu"
"रृ" = "rri"
"रे" = "re"
"रै" = "rai"
"रो" = "ro"
"रौ" = "rau"
"रॉ" = "ro"

"ल" = "la"
"ल्" = "l"
"ला" = "laa"
"लि" = "li"
"ली" = "lii"
"लु" = "lu"
"लू" = "luu"
"लृ" = "lri"
"ले" = "le"
"लै" = "lai"
"लो" = "lo"
"लौ" = "lau"
"लॉ" = "lo"

"ळ" = "la"
"ळ्" = "l"
"ळा" = "laa"
"ळि" = "li"
"ळी" = "lii"
"ळु" = "lu"
"ळू" = "luu"
"ळृ" = "lri"
"ळे" = "le"
"ळै" = "lai"
"ळो" = "lo"
"ळौ" = "lau"
"ळॉ" = "lo"

"व" = "va"
"व्" = "v"
"वा" = "vaa"
"वि" = "vi"
"वी" = "vii"
"वु" = "vu"
"वू" = "vuu"
"वृ" = "vri"
"वे" = "ve"
"वै" = "vai"
"वो" = "vo"
"वौ" = "vau"
"वॉ" = "vo"

"श" = "sha"
"श्" = "sh"
"शा" = "shaa"
"शि" = "shi"
"शी" = "shii"
"शु" = "shu"
"शू" = "shuu"
"शृ" = "shri"
"शे" = "she"
"शै" = "shai"
"शो" = "sho"
"शौ" = "shau"
"शॉ" = "sho"

"ष" = "sha"
"ष्" = "sh"
"षा" = "shaa"
"षि" = "shi"
"षी" = "shii"
"षु" = "shu"
"षू" = "shuu"
"षृ" = "shri"
"षे" = "she"
"षै" = "shai"
"षो" = "sho"
"षौ" = "shau"
"षॉ" = "sho"

"स" = "sa"
"स्" = "s"
"सा" = "saa"
"सि" = "si"
"सी" = "sii"
"सु" = "su"
"सू" = "suu"
"सृ" = "sri"
"से" = "se"
"सै" = "sai"
"सो" = "so"
"सौ" = "sau"
"सॉ" = "so"

"ह" = "ha"
"ह्" = "h"
"हा" = "haa"
"हि" = "hi"
"ही" = "hii"
"हु" = "hu"
"हू" = "huu"
"हृ" = "hri"
"हे" = "he"
"है" = "hai"
"हो" = "ho"
"हौ" = "hau"
"हॉ" = "ho"

"क़" = "qa"
"क़्" = "q"
"क़ा" = "qaa"
"क़ि" = "qi"
"क़ी" = "qii"
"क़ु" = "qu"
"क़ू" = "quu"
"क़ृ" = "qri"
"क़े" = "qe"
"क़ै" = "qai"
"क़ो" = "qo"
"क़ौ" = "qau"
"क़ॉ" = "qo"

"ख़" = "kha"
"ख़्" = "kh"
"ख़ा" = "khaa"
"ख़ि" = "khi"
"ख़ी" = "khii"
"ख़ु" = "khu"
"ख़ू" = "khuu"
"ख़ृ" = "khri"
"ख़े" = "khe"
"ख़ै" = "khai"
"ख़ो" = "kho"
"ख़ौ" = "khau"
"ख़ॉ" = "kho"

"ग़" = "ga"
"ग़्" = "g"
"ग़ा" = "gaa"
"ग़ि" = "gi"
"ग़ी" = "gii"
"ग़ु" = "gu"
"ग़ू" = "guu"
"ग़ृ" = "gri"
"ग़े" = "ge"
"ग़ै" = "gai"
"ग़ो" = "go"
"ग़ौ" = "gau"
"ग़ॉ" = "go"

"ज़" = "za"
"ज़्" = "z"
"ज़ा" = "zaa"
"ज़ि" = "zi"
"ज़ी" = "zii"
"ज़ु" = "zu"
"ज़ू" = "zuu"
"ज़ृ" = "zri"
"ज़े" = "ze"
"ज़ै" = "zai"
"ज़ो" = "zo"
"ज़ौ" = "zau"
"ज़ॉ" = "zo"

"ड़" = "ra"
"ड़्" = "r"
"ड़ा" = "raa"
"ड़ि" = "ri"
"ड़ी" = "rii"
"ड़ु" = "ru"
"ड़ू" = "ruu"
"ड़ृ" = "rri"
"ड़े" = "re"
"ड़ै" = "rai"
"ड़ो" = "ro"
"ड़ौ" = "rau"
"ड़ॉ" = "ro"

"ढ़" = "rha"
"ढ़्" = "rh"
"ढ़ा" = "rhaa"
"ढ़ि" = "rhi"
"ढ़ी" = "rhii"
"ढ़ु" = "rhu"
"ढ़ू" = "rhuu"
"ढ़ृ" = "rhri"
"ढ़े" = "rhe"
"ढ़ै" = "rhai"
"ढ़ो" = "rho"
"ढ़ौ" = "rhau"
"ढ़ॉ" = "rho"

"फ़" = "fa"
"फ़्" = "f"
"फ़ा" = "faa"
"फ़ि" = "fi"
"फ़ी" = "fii"
"फ़ु" = "fu"
"फ़ू" = "fuu"
"फ़ृ" = "fri"
"फ़े" = "fe"
"फ़ै" = "fai"
"फ़ो" = "fo"
"फ़ौ" = "fau"
"फ़ॉ" = "fo"

"य़" = "ya"
"य़्" = "y"
"य़ा" = "yaa"
"य़ि" = "yi"
"य़ी" = "yii"
"य़ु" = "yu"
"य़ू" = "yuu"
"य़ृ" = "yri"
"य़े" = "ye"
"य़ै" = "yai"
"य़ो" = "yo"
"य़ौ" = "yau"
"य़ॉ" = "yo"

"क़" = "qa"
"क़्" = "q"
"क़ा" = "qaa"
"क़ि" = "qi"
"क़ी" = "qii"
"क़ु" = "qu"
"क़ू" = "quu"
"क़ृ" = "qri"
"क़े" = "qe"
"क़ै" = "qai"
"क़ो" = "qo"
"क़ौ" = "qau"
"क़ॉ" = "qo"

"ख़" = "kha"
"ख़्" = "kh"
"ख़ा" = "khaa"
"ख़ि" = "khi"
"ख़ी" = "khii"
"ख़ु" = "khu"
"ख़ू" = "khuu"
"ख़ृ" = "khri"
"ख़े" = "khe"
"ख़ै" = "khai"
"ख़ो" = "kho"
"ख़ौ" = "khau"
"ख़ॉ" = "kho"

"ग़" = "ga"
"ग़्" = "g"
"ग़ा" = "gaa"
"ग़ि" = "gi"
"ग़ी" = "gii"
"ग़ु" = "gu"
"ग़ू" = "guu"
"ग़ृ" = "gri"
"ग़े" = "ge"
"ग़ै" = "gai"
"ग़ो" = "go"
"ग़ौ" = "gau"
"ग़ॉ" = "go"

"ज़" = "za"
"ज़्" = "z"
"ज़ा" = "zaa"
"ज़ि" = "zi"
"ज़ी" = "zii"
"ज़ु" = "zu"
"ज़ू" = "zuu"
"ज़ृ" = "zri"
"ज़े" = "ze"
"ज़ै" = "zai"
"ज़ो" = "zo"
"ज़ौ" = "zau"
"ज़ॉ" = "zo"

"ड़" = "ra"
"ड़्" = "r"
"ड़ा" = "raa"
"ड़ि" = "ri"
"ड़ी" = "rii"
"ड़ु" = "ru"
"ड़ू" = "ruu"
"ड़ृ" = "rri"
"ड़े" = "re"
"ड़ै" = "rai"
"ड़ो" = "ro"
"ड़ौ" = "rau"
"ड़ॉ" = "ro"

"ढ़" = "rha"
"ढ़्" = "rh"
"ढ़ा" = "rhaa"
"ढ़ि" = "rhi"
"ढ़ी" = "rhii"
"ढ़ु" = "rhu"
"ढ़ू" = "rhuu"
"ढ़ृ" = "rhri"
"ढ़े" = "rhe"
"ढ़ै" = "rhai"
"ढ़ो" = "rho"
"ढ़ौ" = "rhau"
"ढ़ॉ" = "rho"

"फ़" = "fa"
"फ़्" = "f"
"फ़ा" = "faa"
"फ़ि" = "fi"
"फ़ी" = "fii"
"फ़ु" = "fu"
"फ़ू" = "fuu"
"फ़ृ" = "fri"
"फ़े" = "fe"
"फ़ै" = "fai"
"फ़ो" = "fo"
"फ़ौ" = "fau"
"फ़ॉ" = "fo"

"य़" = "ya"
"य़्" = "y"
"य़ा" = "yaa"
"य़ि" = "yi"
"य़ी" = "yii"
"य़ु" = "yu"
"य़ू" = "yuu"
"य़ृ" = "yri"
"य़े" = "ye"
"य़ै" = "yai"
"य़ो" = "yo"
"य़ौ" = "yau"
"य़ॉ" = "yo"

# Conjuncts whose naive dead-consonant composition misrenders
"ज्ञ" = "gya"
"ज्ञ्" = "gy"
"ज्ञा" = "gyaa"
"ज्ञि" = "gyi"
"ज्ञी" = "gyii"
"ज्ञु" = "gyu"
"ज्ञू" = "gyuu"
"ज्ञृ" = "gyri"
"ज्ञे" = "gye"
"ज्ञै" = "gyai"
"ज्ञो" = "gyo"
"ज्ञौ" = "gyau"
"ज्ञॉ" = "gyo"

# Bare matras, for malformed text where no consonant precedes
"ा" = "aa"
"ि" = "i"
"ी" = "ii"
"ु" = "u"
"ू" = "uu"
"ृ" = "ri"
"े" = "e"
"ै" = "ai"
"ो" = "o"
"ौ" = "au"
"ॉ" = "o"

# Signs and punctuation
"ं" = "n"
"ँ" = "n"
"ः" = "h"
"्" = ""
"़" = ""
"ऽ" = ""
"ॐ" = "om"
"।" = "."
"॥" = "."

# Digits
"०" = "0"
"१" = "1"
"२" = "2"
"३" = "3"
"४" = "4"
"५" = "5"
"६" = "6"
"७" = "7"
"८" = "8"
"९" = "9"
"#;
