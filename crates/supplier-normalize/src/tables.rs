//! Ordered rewrite tables.
//!
//! Every table is an ordered slice, never a map: rules run top to bottom and
//! later rules see the output of earlier ones. Several rules deliberately
//! overlap (for example `SCOUT GROUP` before `SCOUT GROUPS`, or `CO OP`
//! before `CO OPERATIVE`); reordering them changes canonical names and so
//! breaks agreement with previously prepared registries.
//!
//! Tables that start or end with a space match whole tokens only because the
//! name is padded with a space on both sides before they run.

use crate::rule::Rewrite;

pub const BACKTICK_POSSESSIVE: &[Rewrite] = &[("`S", "'S")];

pub const PUNCTUATION: &[Rewrite] = &[
    ("ST.", "ST "),
    ("ASSOC.", "ASSOC "),
    ("..", " "),
    (".", ""),
    ("(", " "),
    (")", " "),
    (",", " "),
    (";", " "),
    (":", " "),
    ("-", " "),
    ("/", " "),
    ("@", " "),
    ("+", " "),
    ("*", " "),
    ("[", " "),
    ("]", " "),
    ("!", " "),
    ("|", " "),
    ("`", " "),
    ("=", " "),
    ("\\", " "),
    ("_", " "),
    ("{", " "),
    ("}", " "),
    ("%", " "),
    ("&", " "),
    ("#", " "),
];

pub const POSSESSIVE_SUFFIXES: &[Rewrite] = &[
    (" 'S ", "S "),
    ("'S ", "S "),
    ("' ", " "),
    (" '", " "),
    ("S'", "S "),
    ("'N'", " N "),
    ("'", ""),
];

pub const MISSPELLINGS: &[Rewrite] = &[
    ("FREIND", "FRIEND"),
    (" ASSOCATION", " ASSOCIATION"),
    (" ASSOCIATON", " ASSOCIATION"),
    (" ASOCIATION", " ASSOCIATION"),
    (" ASSOCAITION", " ASSOCIATION"),
    (" ASSOCIAION ", " ASSOCIATION "),
    (" ASSOCIATOPM", " ASSOCIATION"),
    (" ASS ", " ASSOCIATION "),
    (" ASSOCN ", " ASSOCIATION "),
    (" ASSOCIATIONSACDA ", " ASSOCIATION SACDA "),
    (" CENTER", " CENTRE"),
    ("GIUDE", "GUIDE"),
    (" CONGEGATION ", " CONGREGATION "),
    (" ORGANIZAT", " ORGANISAT"),
    (" DISTICT ", " DISTRICT "),
    (" DISRICT ", " DISTRICT "),
    (" DISABILLI", " DISABILI"),
    (" AMATUER ", " AMATEUR "),
    (" BUSISNESS ", " BUSINESS "),
    (" VICARIGE ", " VICARAGE "),
    (" REHABILITAION ", " REHABILITATION "),
    (" PANAL", " PANEL"),
    (" BRITAN ", " BRITAIN "),
    (" BRITANIA ", " BRITANNIA "),
    (" CUMBRA ", " CUMBRIA "),
    (" NEIGHBOR", " NEIGHBOUR"),
    (" COUNCILOR ", " COUNCILLOR "),
    (" MATHEW", " MATTHEW"),
    (" VILLIAGE", " VILLAGE"),
    (" HERATAGE ", " HERITAGE "),
    (" SHEILD", " SHIELD"),
    (" COMUNITY ", " COMMUNITY "),
    (" COMUNITIES ", " COMMUNITIES "),
    (" COMMMUNITY ", " COMMUNITY "),
    (" COMITTEE", " COMMITTEE"),
    (" COMMITEE", " COMMITTEE"),
    (" INDEPENDANT ", " INDEPENDENT "),
    (" SYNDROMAE ", " SYNDROME "),
    (" WILDLIFW ", " WILDLIFE "),
    (" CENRE ", " CENTRE "),
    (" COMMUNITYYOUTH ", " COMMUNITY YOUTH "),
    (" AUTISMWEST ", " AUTISM WEST "),
    (" OFGOD ", " OF GOD "),
    (" INFORMARION ", " INFORMATION "),
    (" DEVELOPEMENT ", " DEVELOPMENT "),
    (" CHRITIAN ", " CHRISTIAN "),
    (" ROYALM ", " ROYAL "),
    (" LARYNGECOMY ", " LARYNGECTOMY "),
    (" ALCHOL ", " ALCOHOL "),
    (" RESARCH ", " RESEARCH "),
    (" REASEARCH ", " RESEARCH "),
    (" BEATY ", " BEAUTY "),
    (" CENTR ", " CENTRE "),
];

/// Truncations of `LIMITED`, longest first, folded when they are the last token.
pub const LEGAL_SUFFIX_VARIANTS: &[&str] = &["LIMITED", "LIMITE", "LIMIT", "LIMI", "LIM"];

pub const LEGAL_SUFFIX_REPLACEMENT: &str = "LTD ";

pub const ORGANISATION_FORMS: &[Rewrite] = &[
    ("PUBLIC LIMITED COMPANY", "PLC"),
    ("C I C", "CIC"),
    ("COMMUNITY INTEREST COMPANY", "CIC"),
    ("COMMUNITY INTEREST COMPAN", "CIC"),
    ("COMMUNITY INTEREST COMPA", "CIC"),
    ("COMMUNITY INTEREST COMP", "CIC"),
    ("COMMUNITY INTEREST COM", "CIC"),
    ("COMMUNITY INTEREST CO", "CIC"),
    ("COUNCIL FOR VOLUNTARY SERVICES", "CVS"),
    ("COUNCIL FOR VOLUNTARY SERVICE", "CVS"),
    ("UNITED REFORMED CHURCH", "URC"),
    ("URC CHURCH", "URC"),
    ("UR CHURCH", "URC"),
    ("ALSO KNOWN AS", "AKA"),
    ("ROYAL ANTEDILUVIAN ORDER OF BUFFALOES", "RAOB"),
    ("ROYAL ANTIDILUVIAN ORDER OF BUFALLOES", "RAOB"),
    ("ROYAL ANTEDILUVIAN ORDER OF BUFFALOS", "RAOB"),
    ("CO OP", "COOPERATIVE"),
    ("CO OPS", "COOPERATIVE"),
    ("CO OPERATIVE", "COOPERATIVE"),
    ("CO OPERATIVES", "COOPERATIVE"),
    ("COOP ", "COOPERATIVE"),
    ("COOPS", "COOPERATIVE"),
    ("COOPERATIVES", "COOPERATIVE"),
    ("DEPARTMENT", "DEPT"),
    ("DEPARTMENTS", "DEPT"),
    ("DEPTS", "DEPT"),
    ("PROG ", "PROGRAMME"),
    ("PROGRAM ", "PROGRAMME"),
    ("ASSOCIATION", "ASSOC"),
    ("COMM ", "COMMUNITY"),
    ("SOCIETY", "SOC"),
    ("SOCY", "SOC"),
    (" SERV", " SERVICE"),
    ("REGT", "REGIMENT"),
    (" INFO", " INFORMATION"),
    (" AVE", " AVENUE"),
    (" THEATRE CO ", "THEATRE COMPANY"),
    ("AND CO ", "AND COMPANY "),
    ("CO LTD", "COMPANY LTD"),
];

pub const STOP_WORDS: &[Rewrite] = &[
    (" THE ", " "),
    (" AND ", " "),
    (" OF ", " "),
    (" FOR ", " "),
    (" WITH ", " "),
    (" AT ", " "),
    (" TO ", " "),
    (" IN ", " "),
    (" ON ", " "),
    (" AN ", " "),
];

pub const YOUTH_GROUPS: &[Rewrite] = &[
    ("SCOUT GROUP", "SCOUTS"),
    (" SCOUT ASSOC ", " SCOUTS "),
    (" SCOUTS ASSOC ", " SCOUTS "),
    ("SCOUT UNIT", "SCOUTS"),
    ("SCOUT UNITS", "SCOUTS"),
    ("SCOUTS UNIT", "SCOUTS"),
    ("SCOUTS UNITS", "SCOUTS"),
    ("SCOUT GROUPS", "SCOUTS"),
    ("SCOUTS GROUP", "SCOUTS"),
    ("SCOUTS GROUPS", "SCOUTS"),
    ("SCOUT PACK", "SCOUTS"),
    ("SCOUT PACKS", "SCOUTS"),
    ("SCOUTS PACK", "SCOUTS"),
    ("SCOUTS PACKS", "SCOUTS"),
    ("BOY SCOUTS", "SCOUTS"),
    ("GIRL GUIDE", "GIRL GUIDES"),
    ("GIRL GUIDING", "GIRL GUIDES"),
    ("GIRLGUIDING", "GIRL GUIDES"),
    ("GIRL GUIDES", "GUIDES"),
    ("GUIDE ASSOC", "GUIDES"),
    ("GUIDES ASSOC", "GUIDES"),
    ("GUIDE UNIT", "GUIDES"),
    ("GUIDE UNITS", "GUIDES"),
    ("GUIDES UNIT", "GUIDES"),
    ("GUIDES UNITS", "GUIDES"),
    ("GUIDE GROUP", "GUIDES"),
    ("GUIDE GROUPS", "GUIDES"),
    ("GUIDES GROUP", "GUIDES"),
    ("GUIDES GROUPS", "GUIDES"),
    ("GUIDE PACK", "GUIDES"),
    ("GUIDE PACKS", "GUIDES"),
    ("GUIDES PACK", "GUIDES"),
    ("GUIDES PACKS", "GUIDES"),
    ("BROWNIE ASSOC ", "BROWNIES "),
    ("BROWNIES ASSOC ", "BROWNIES "),
    ("BROWNIE UNIT", "BROWNIES"),
    ("BROWNIE UNITS", "BROWNIES"),
    ("BROWNIES UNIT", "BROWNIES"),
    ("BROWNIES UNITS", "BROWNIES"),
    ("BROWNIE GROUP", "BROWNIES"),
    ("BROWNIE GROUPS", "BROWNIES"),
    ("BROWNIES GROUP", "BROWNIES"),
    ("BROWNIES GROUPS", "BROWNIES"),
    ("BROWNIE PACK", "BROWNIES"),
    ("BROWNIE PACKS", "BROWNIES"),
    ("BROWNIES PACK", "BROWNIES"),
    ("BROWNIES PACKS", "BROWNIES"),
    ("BEAVER GROUP", "BEAVERS"),
    ("BEAVER GROUPS", "BEAVERS"),
    ("BEAVERS GROUP", "BEAVERS"),
    ("BEAVERS GROUPS", "BEAVERS"),
    ("BEAVER COLONY", "BEAVERS"),
    ("BEAVERS COLONY", "BEAVERS"),
];

pub const SCHOOL_TYPES: &[Rewrite] = &[
    ("CESCHOOL", "CE SCHOOL"),
    ("CPSCHOOL", "CP SCHOOL"),
    ("RCSCHOOL", "RC SCHOOL"),
    ("PRE SCHOOL", "PRESCHOOL"),
    ("PLAY SCHOOL", "PLAYSCHOOL"),
];

pub const CLUBS: &[Rewrite] = &[
    ("WOMENS INSTITUTE", "WI"),
    ("WOMEN INSTITUTE", "WI"),
    ("WORKINGMENS", "WORKING MENS"),
    ("WORKING MENS SOCIAL CLUB", "WMC"),
    ("WORKING MENS CLUB", "WMC"),
    ("WORKMENS CLUB", "WMC"),
    ("WMC INSTITUTE", "WMC"),
];

pub const SAINTS_AND_DIRECTIONS: &[Rewrite] = &[
    ("SAINT", "ST"),
    ("NORTH EAST", "NE"),
    ("NORTH WEST", "NW"),
    ("SOUTH EAST", "SE"),
    ("SOUTH WEST", "SW"),
    ("NORTHEAST", "NE"),
    ("NORTHWEST", "NW"),
    ("SOUTHEAST", "SE"),
    ("SOUTHWEST", "SW"),
    ("STH", "SOUTH"),
    ("COF E", "CE"),
    ("C OFE", "CE"),
    ("COFE", "CE"),
];

/// Ceremonial counties to their customary postal abbreviations.
pub const COUNTIES: &[Rewrite] = &[
    ("MIDDLESEX", "MIDDX"),
    ("BEDFORDSHIRE", "BEDS"),
    ("BERKSHIRE", "BERKS"),
    ("BUCKINGHAMSHIRE", "BUCKS"),
    ("CAMBRIDGESHIRE", "CAMBS"),
    ("HUNTINGDONSHIRE", "HUNTS"),
    ("CHESHIRE", "CHES"),
    ("DERBYSHIRE", "DERBYS"),
    ("CO DURHAM", "COUNTY DURHAM"),
    ("GLOUCESTERSHIRE", "GLOS"),
    ("HAMPSHIRE", "HANTS"),
    ("HAMPS", "HANTS"),
    ("HEREFORDSHIRE", "HEREFS"),
    ("HERTFORDSHIRE", "HERTS"),
    ("ISLE OF WIGHT", "IOW"),
    ("ISLE WIGHT", "IOW"),
    ("LANCASHIRE", "LANCS"),
    ("LEICESTERSHIRE", "LEICS"),
    ("LINCOLNSHIRE", "LINCS"),
    ("NORTHAMPTONSHIRE", "NORTHANTS"),
    ("NLAND", "NORTHUMBERLAND"),
    ("NOTTINGHAMSHIRE", "NOTTS"),
    ("OXFORDSHIRE", "OXON"),
    ("SHROPSHIRE", "SALOP"),
    ("SHROPS", "SALOP"),
    ("STAFFORDSHIRE", "STAFFS"),
    ("WARWICKSHIRE", "WARKS"),
    ("WILTSHIRE", "WILTS"),
    ("WORCESTERSHIRE", "WORCS"),
    ("YORKSHIRE", "YORKS"),
];

pub const PLACE_SPELLINGS: &[Rewrite] = &[
    ("SOUTHAMPTION", "SOUTHAMPTON"),
    ("SOTHAMPTON", "SOUTHAMPTON"),
    ("BRIMINGHAM", "BIRMINGHAM"),
    ("BHAM", "BIRMINGHAM"),
    ("BIRMINGAHM", "BIRMINGHAM"),
    ("PERY BARR", "PERRY BARR"),
    ("GLAGOW", "GLASGOW"),
];

pub const SPORTS_AND_BODIES: &[Rewrite] = &[
    ("FOOTBALL CLUB", "FC"),
    ("YOUNG MENS CHRISTIAN ASSOCIATION", "YMCA"),
    ("YOUNG WOMENS CHRISTIAN ASSOCIATION", "YWCA"),
    ("YOUNG MENS CHRISTIAN ASSOC", "YMCA"),
    ("YOUNG WOMENS CHRISTIAN ASSOC", "YWCA"),
    ("INCORPORATED", "INC"),
    (" AFC", " FC"),
    ("JUNIORS FC", "JUNIOR FC"),
    ("JFC", "JUNIOR FC"),
    ("ARLFC", "AMATEUR RUGBY LEAGUE FC"),
    ("RUFC", "RUGBY UNION FC"),
    ("RLFC", "RUGBY LEAGUE FC"),
    ("RFC", "RUGBY FC"),
    ("YFC", "YOUTH FC"),
];

pub const TOWNS: &[Rewrite] = &[
    ("NEWCASTLE UPON TYNE", "NEWCASTLE"),
    ("NEWCASTLE TYNE", "NEWCASTLE"),
    ("HOLME UPON SPALDING MOOR", "HOLME SPALDING MOOR"),
    ("UPON", ""),
];

pub const ORDINAL_WORDS: &[Rewrite] = &[
    ("1ST", "FIRST"),
    ("IST", "FIRST"),
    ("2ND", "SECOND"),
    ("3RD", "THIRD"),
    ("FOURTH", "4"),
    ("FIFTH", "5"),
    ("SIXTH", "6"),
    ("SEVENTH", "7"),
    ("EIGHTH", "8"),
    ("NINTH", "9"),
    ("TENTH", "10"),
    ("ELEVENTH", "11"),
    ("TWELFTH", "12"),
    ("THIRTEENTH", "13"),
    ("FOURTEENTH", "14"),
    ("FIFTEENTH", "15"),
    ("SIXTEENTH", "16"),
    ("SEVENTEENTH", "17"),
    ("EIGHTEENTH", "18"),
    ("NINETEENTH", "19"),
    ("TWENTIETH", "20"),
];

pub const GUIDE_TERMS: &[Rewrite] = &[(" BROWNIE ", " BROWNIES "), (" SCOUT ", " SCOUTS ")];

pub const SCOUT_TERMS: &[Rewrite] = &[(" CUB ", " CUBS "), (" SCOUT SCOUT ", " SCOUT ")];

pub const SCHOOL_TERMS: &[Rewrite] = &[
    (" ROMAN CATHOLIC ", " RC "),
    (" CATHOLIC ", " RC "),
    (" CHURCH ENGLAND ", " CE "),
    (" JUNIOR INFANT ", " JI "),
];

/// Spelled-out ordinals and the numeric marker appended when they occur.
pub const ORDINAL_MARKERS: &[(&str, &str)] = &[(" FIRST ", "1"), (" SECOND ", "2"), (" THIRD ", "3")];

/// Numeral suffixes stripped after each digit, in order.
pub const ORDINAL_SUFFIXES: &[&str] = &["ST", "ND", "RD", "TH"];

pub const COMPOUND_WORDS: &[Rewrite] = &[
    (" CO OPERAT", " COOPERAT"),
    (" CO ORDINAT", " COORDINAT"),
    (" PRIMARY CARE TRUST", " PCT"),
    (" NATIONAL HEALTH SERVICE ", " NHS "),
    (" A ", " "),
];
