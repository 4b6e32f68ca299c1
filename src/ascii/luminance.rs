//! Per-pixel relative luminance on a 0-100 scale.

use serde::Serialize;

use crate::camera::PixelGrid;

/// Largest luminance value.
pub const MAX_LUMINANCE: u8 = 100;

/// sRGB channel value (0-255) linearized and scaled by 1e12.
/// Formula: c/12.92 if c <= 0.04045 else ((c + 0.055) / 1.055)^2.4
/// Generated with: round(linear(i / 255) * 1e12) for i in 0..256
///
/// At this scale the truncated sum agrees with `floor(Y * 100)` evaluated
/// in f64 for every one of the 2^24 RGB triples.
#[rustfmt::skip]
const SRGB_TO_LINEAR: [u64; 256] = [
                 0,      303526984,      607053967,      910580951,     1214107934,     1517634918,
        1821161901,     2124688885,     2428215868,     2731742852,     3035269835,     3346535764,
        3676507324,     4024717018,     4391442037,     4776953481,     5181516702,     5605391624,
        6048833023,     6512090793,     6995410187,     7499032043,     8023192985,     8568125618,
        9134058702,     9721217320,    10329823030,    10960094006,    11612245180,    12286488357,
       12983032342,    13702083047,    14443843596,    15208514423,    15996293366,    16807375753,
       17641954488,    18500220128,    19382360957,    20288563057,    21219010376,    22173884793,
       23153366178,    24157632449,    25186859627,    26241221895,    27320891639,    28426039504,
       29556834438,    30713443733,    31896033073,    33104766571,    34339806809,    35601314875,
       36889450401,    38204371595,    39546235277,    40915196907,    42311410621,    43735029257,
       45186204386,    46665086337,    48171824227,    49706565984,    51269458374,    52860647023,
       54480276442,    56128490050,    57805430191,    59511238163,    61246054232,    63010017653,
       64803266693,    66625938644,    68478169844,    70360095697,    72271850682,    74213568380,
       76185381481,    78187421805,    80219820314,    82282707130,    84376211544,    86500462037,
       88655586286,    90841711183,    93058962847,    95307466631,    97587347142,    99898728247,
      102241733088,   104616484091,   107023102978,   109461710778,   111932427837,   114435373827,
      116970667759,   119538427988,   122138772230,   124771817561,   127437680436,   130136476690,
      132868321554,   135633329655,   138431615032,   141263291140,   144128470858,   147027266498,
      149959789811,   152926151996,   155926463708,   158960835061,   162029375639,   165132194502,
      168269400190,   171441100733,   174647403656,   177888415984,   181164244250,   184474994500,
      187820772301,   191201682741,   194617830442,   198069319560,   201556253794,   205078736390,
      208636870145,   212230757414,   215860500114,   219526199729,   223227957317,   226965873510,
      230740048524,   234550582161,   238397573812,   242281122466,   246201326708,   250158284730,
      254152094331,   258182852922,   262250657530,   266355604803,   270497791013,   274677312060,
      278894263477,   283148740430,   287440837727,   291770649818,   296138270798,   300543794416,
      304987314070,   309468922818,   313988713376,   318546778125,   323143209113,   327778098057,
      332451536346,   337163615048,   341914424909,   346704056355,   351532599500,   356400144146,
      361306779784,   366252595599,   371237680474,   376262122991,   381326011433,   386429433787,
      391572477750,   396755230726,   401977779832,   407240211902,   412542613484,   417885070848,
      423267669986,   428690496614,   434153636175,   439657173841,   445201194516,   450785782838,
      456411023180,   462076999654,   467783796112,   473531496148,   479320183101,   485149940056,
      491020849848,   496932995061,   502886458033,   508881320855,   514917665377,   520995573204,
      527115125706,   533276404011,   539479489012,   545724461370,   552011401512,   558340389634,
      564711505705,   571124829465,   577580440430,   584078417891,   590618840919,   597201788364,
      603827338855,   610495570808,   617206562420,   623960391675,   630757136346,   637596873994,
      644479681971,   651405637420,   658374817279,   665387298282,   672443156958,   679542469633,
      686685312435,   693871761292,   701101891933,   708375779892,   715693500506,   723055128922,
      730460740090,   737910408773,   745404209540,   752942216776,   760524504675,   768151147248,
      775822218317,   783537791526,   791297940333,   799102738014,   806952257669,   814846572216,
      822785754396,   830769876775,   838799011741,   846873231510,   854992608124,   863157213454,
      871367119199,   879622396888,   887923117882,   896269353374,   904661174391,   913098651793,
      921581856277,   930110858375,   938685728458,   947306536733,   955973353249,   964686247894,
      973445290398,   982250550333,   991102097114,  1000000000000,
];

/// Luminance formula used to weigh RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LuminanceFormula {
    /// sRGB relative luminance: linearize channels, then
    /// Y = 0.2126*R + 0.7152*G + 0.0722*B
    #[default]
    Rec709,
    /// ITU-R BT.601 on gamma-encoded values: Y = 0.299*R + 0.587*G + 0.114*B
    Bt601,
}

impl LuminanceFormula {
    pub fn name(&self) -> &'static str {
        match self {
            LuminanceFormula::Rec709 => "rec709",
            LuminanceFormula::Bt601 => "bt601",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "rec709" | "srgb" => Some(LuminanceFormula::Rec709),
            "bt601" => Some(LuminanceFormula::Bt601),
            _ => None,
        }
    }

    /// Luminance of one RGB pixel, truncated to 0-100.
    ///
    /// Integer math only, so every platform produces the same value.
    #[inline]
    pub fn luminance(&self, rgb: [u8; 3]) -> u8 {
        let [r, g, b] = rgb;
        match self {
            LuminanceFormula::Rec709 => {
                // Weights scaled by 1e4 (sum 10000), channels by 1e12;
                // the largest sum is 1e16, well inside u64
                let y = 2126 * SRGB_TO_LINEAR[r as usize]
                    + 7152 * SRGB_TO_LINEAR[g as usize]
                    + 722 * SRGB_TO_LINEAR[b as usize];
                (y / 100_000_000_000_000) as u8
            }
            LuminanceFormula::Bt601 => {
                // Coefficients scaled by 1000: 299 + 587 + 114 = 1000
                let y = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
                (y * MAX_LUMINANCE as u32 / (1000 * 255)) as u8
            }
        }
    }
}

/// Luminance values (0-100), one per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuminanceGrid {
    pub width: u32,
    pub height: u32,
    values: Vec<u8>,
}

impl LuminanceGrid {
    /// Build a grid from raw values.
    ///
    /// Returns `None` if the value count does not match the dimensions.
    /// Values are not range-checked here; the glyph mapper rejects
    /// anything above [`MAX_LUMINANCE`].
    pub fn from_values(width: u32, height: u32, values: Vec<u8>) -> Option<Self> {
        if values.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            values,
        })
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.values[y as usize * self.width as usize + x as usize])
    }

    /// Iterate over rows; yields nothing for an empty grid.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on zero, and a zero-width grid has no rows anyway
        let width = (self.width as usize).max(1);
        self.values.chunks_exact(width)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Render the grid as space-separated numbers, one row per line.
    pub fn to_table(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|v| format!("{:3}", v))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Compute the luminance grid with the default (Rec.709) formula.
pub fn compute_luminance(grid: &PixelGrid) -> LuminanceGrid {
    compute_luminance_with(grid, LuminanceFormula::default())
}

/// Compute the luminance grid with an explicit formula.
pub fn compute_luminance_with(grid: &PixelGrid, formula: LuminanceFormula) -> LuminanceGrid {
    let mut values = Vec::with_capacity(grid.width as usize * grid.height as usize);
    for rgb in grid.pixels() {
        values.push(formula.luminance(rgb));
    }

    LuminanceGrid {
        width: grid.width,
        height: grid.height,
        values,
    }
}
