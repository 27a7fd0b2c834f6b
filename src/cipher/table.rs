/// Plain character to cipher symbol. Letters are stored uppercase.
pub const SYMBOLS: [(char, char); 41] = [
    ('A', '◈'),
    ('B', '◇'),
    ('C', '○'),
    ('D', '□'),
    ('E', '△'),
    ('F', '▽'),
    ('G', '☆'),
    ('H', '◎'),
    ('I', '◉'),
    ('J', '◍'),
    ('K', '◐'),
    ('L', '◑'),
    ('M', '◒'),
    ('N', '◓'),
    ('O', '◔'),
    ('P', '◕'),
    ('Q', '⚉'),
    ('R', '⚇'),
    ('S', '⚆'),
    ('T', '⚈'),
    ('U', '✧'),
    ('V', '✦'),
    ('W', '❖'),
    ('X', '✵'),
    ('Y', '❈'),
    ('Z', '✴'),
    (' ', '⟡'),
    ('.', '⟢'),
    (',', '⟣'),
    ('!', '⟤'),
    ('?', '⟥'),
    ('0', '⎔'),
    ('1', '⎊'),
    ('2', '⎈'),
    ('3', '⎇'),
    ('4', '⌬'),
    ('5', '⌭'),
    ('6', '⌮'),
    ('7', '⌯'),
    ('8', '⌰'),
    ('9', '⌱'),
];
