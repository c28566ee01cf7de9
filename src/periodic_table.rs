//! Periodic table data for elements 1–118.
//!
//! [`default_elements`] is the element database used when a substance is
//! built without an explicit one. It is constructed once, on first use,
//! and never mutated afterwards.

use std::sync::LazyLock;

use crate::element::Element;
use crate::elements::Elements;

static DEFAULT_ELEMENTS: LazyLock<Elements> = LazyLock::new(periodic_table);

/// The shared, immutable periodic table.
pub fn default_elements() -> &'static Elements {
    &DEFAULT_ELEMENTS
}

/// Build a fresh periodic table with all 118 elements, ordered by atomic
/// number. Atomic weights are in kg/mol.
pub fn periodic_table() -> Elements {
    TABLE
        .iter()
        .enumerate()
        .map(|(i, &(symbol, name, weight, en))| {
            Element::new(symbol)
                .with_name(name)
                .with_atomic_number(i as u32 + 1)
                .with_atomic_weight(weight / 1000.0)
                .with_electronegativity(en)
        })
        .collect()
}

// Symbol, name, standard atomic weight in g/mol (IUPAC CIAAW 2021; mass
// number of the longest-lived isotope for elements without stable ones),
// Pauling electronegativity. Row i holds atomic number i + 1.
static TABLE: [(&str, &str, f64, Option<f64>); 118] = [
    ("H", "Hydrogen", 1.008, Some(2.20)),
    ("He", "Helium", 4.002602, None),
    ("Li", "Lithium", 6.941, Some(0.98)),
    ("Be", "Beryllium", 9.0121831, Some(1.57)),
    ("B", "Boron", 10.81, Some(2.04)),
    ("C", "Carbon", 12.011, Some(2.55)),
    ("N", "Nitrogen", 14.007, Some(3.04)),
    ("O", "Oxygen", 15.999, Some(3.44)),
    ("F", "Fluorine", 18.998403163, Some(3.98)),
    ("Ne", "Neon", 20.1797, None),
    ("Na", "Sodium", 22.98976928, Some(0.93)),
    ("Mg", "Magnesium", 24.305, Some(1.31)),
    ("Al", "Aluminium", 26.9815384, Some(1.61)),
    ("Si", "Silicon", 28.085, Some(1.90)),
    ("P", "Phosphorus", 30.973761998, Some(2.19)),
    ("S", "Sulfur", 32.06, Some(2.58)),
    ("Cl", "Chlorine", 35.45, Some(3.16)),
    ("Ar", "Argon", 39.948, None),
    ("K", "Potassium", 39.0983, Some(0.82)),
    ("Ca", "Calcium", 40.078, Some(1.00)),
    ("Sc", "Scandium", 44.955908, Some(1.36)),
    ("Ti", "Titanium", 47.867, Some(1.54)),
    ("V", "Vanadium", 50.9415, Some(1.63)),
    ("Cr", "Chromium", 51.9961, Some(1.66)),
    ("Mn", "Manganese", 54.938043, Some(1.55)),
    ("Fe", "Iron", 55.845, Some(1.83)),
    ("Co", "Cobalt", 58.933194, Some(1.88)),
    ("Ni", "Nickel", 58.6934, Some(1.91)),
    ("Cu", "Copper", 63.546, Some(1.90)),
    ("Zn", "Zinc", 65.38, Some(1.65)),
    ("Ga", "Gallium", 69.723, Some(1.81)),
    ("Ge", "Germanium", 72.630, Some(2.01)),
    ("As", "Arsenic", 74.921595, Some(2.18)),
    ("Se", "Selenium", 78.971, Some(2.55)),
    ("Br", "Bromine", 79.904, Some(2.96)),
    ("Kr", "Krypton", 83.798, Some(3.00)),
    ("Rb", "Rubidium", 85.4678, Some(0.82)),
    ("Sr", "Strontium", 87.62, Some(0.95)),
    ("Y", "Yttrium", 88.90584, Some(1.22)),
    ("Zr", "Zirconium", 91.224, Some(1.33)),
    ("Nb", "Niobium", 92.90637, Some(1.6)),
    ("Mo", "Molybdenum", 95.95, Some(2.16)),
    ("Tc", "Technetium", 97.0, Some(1.9)),
    ("Ru", "Ruthenium", 101.07, Some(2.2)),
    ("Rh", "Rhodium", 102.90549, Some(2.28)),
    ("Pd", "Palladium", 106.42, Some(2.20)),
    ("Ag", "Silver", 107.8682, Some(1.93)),
    ("Cd", "Cadmium", 112.414, Some(1.69)),
    ("In", "Indium", 114.818, Some(1.78)),
    ("Sn", "Tin", 118.710, Some(1.96)),
    ("Sb", "Antimony", 121.760, Some(2.05)),
    ("Te", "Tellurium", 127.60, Some(2.1)),
    ("I", "Iodine", 126.90447, Some(2.66)),
    ("Xe", "Xenon", 131.293, Some(2.60)),
    ("Cs", "Caesium", 132.90545196, Some(0.79)),
    ("Ba", "Barium", 137.327, Some(0.89)),
    ("La", "Lanthanum", 138.90547, Some(1.10)),
    ("Ce", "Cerium", 140.116, Some(1.12)),
    ("Pr", "Praseodymium", 140.90766, Some(1.13)),
    ("Nd", "Neodymium", 144.242, Some(1.14)),
    ("Pm", "Promethium", 145.0, None),
    ("Sm", "Samarium", 150.36, Some(1.17)),
    ("Eu", "Europium", 151.964, None),
    ("Gd", "Gadolinium", 157.25, Some(1.20)),
    ("Tb", "Terbium", 158.925354, None),
    ("Dy", "Dysprosium", 162.500, Some(1.22)),
    ("Ho", "Holmium", 164.930328, Some(1.23)),
    ("Er", "Erbium", 167.259, Some(1.24)),
    ("Tm", "Thulium", 168.934218, Some(1.25)),
    ("Yb", "Ytterbium", 173.045, None),
    ("Lu", "Lutetium", 174.9668, Some(1.27)),
    ("Hf", "Hafnium", 178.486, Some(1.3)),
    ("Ta", "Tantalum", 180.94788, Some(1.5)),
    ("W", "Tungsten", 183.84, Some(2.36)),
    ("Re", "Rhenium", 186.207, Some(1.9)),
    ("Os", "Osmium", 190.23, Some(2.2)),
    ("Ir", "Iridium", 192.217, Some(2.20)),
    ("Pt", "Platinum", 195.084, Some(2.28)),
    ("Au", "Gold", 196.966570, Some(2.54)),
    ("Hg", "Mercury", 200.592, Some(2.00)),
    ("Tl", "Thallium", 204.38, Some(1.62)),
    ("Pb", "Lead", 207.2, Some(2.33)),
    ("Bi", "Bismuth", 208.98040, Some(2.02)),
    ("Po", "Polonium", 209.0, Some(2.0)),
    ("At", "Astatine", 210.0, Some(2.2)),
    ("Rn", "Radon", 222.0, None),
    ("Fr", "Francium", 223.0, Some(0.7)),
    ("Ra", "Radium", 226.0, Some(0.9)),
    ("Ac", "Actinium", 227.0, Some(1.1)),
    ("Th", "Thorium", 232.0377, Some(1.3)),
    ("Pa", "Protactinium", 231.03588, Some(1.5)),
    ("U", "Uranium", 238.02891, Some(1.38)),
    ("Np", "Neptunium", 237.0, Some(1.36)),
    ("Pu", "Plutonium", 244.0, Some(1.28)),
    ("Am", "Americium", 243.0, Some(1.3)),
    ("Cm", "Curium", 247.0, Some(1.3)),
    ("Bk", "Berkelium", 247.0, Some(1.3)),
    ("Cf", "Californium", 251.0, Some(1.3)),
    ("Es", "Einsteinium", 252.0, Some(1.3)),
    ("Fm", "Fermium", 257.0, Some(1.3)),
    ("Md", "Mendelevium", 258.0, Some(1.3)),
    ("No", "Nobelium", 259.0, Some(1.3)),
    ("Lr", "Lawrencium", 266.0, Some(1.3)),
    ("Rf", "Rutherfordium", 267.0, None),
    ("Db", "Dubnium", 268.0, None),
    ("Sg", "Seaborgium", 269.0, None),
    ("Bh", "Bohrium", 270.0, None),
    ("Hs", "Hassium", 277.0, None),
    ("Mt", "Meitnerium", 278.0, None),
    ("Ds", "Darmstadtium", 281.0, None),
    ("Rg", "Roentgenium", 282.0, None),
    ("Cn", "Copernicium", 285.0, None),
    ("Nh", "Nihonium", 286.0, None),
    ("Fl", "Flerovium", 289.0, None),
    ("Mc", "Moscovium", 290.0, None),
    ("Lv", "Livermorium", 293.0, None),
    ("Ts", "Tennessine", 294.0, None),
    ("Og", "Oganesson", 294.0, None),
];
