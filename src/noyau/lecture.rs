// src/noyau/lecture.rs
//
// Lecture décimale tronquée (affichage seulement) :
// - jamais réinjectée dans un calcul
// - troncature vers zéro, `digits` chiffres après la virgule

use num_bigint::BigInt;
use num_traits::Signed;

use super::matrice::Matrice;
use super::rationnel::Rationnel;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize, negatif: bool) -> String {
    if scaled.is_negative() {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;
    let signe = if negatif { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> texte décimal tronqué. Le signe suit r (−1/3 -> "-0.333…").
pub fn rationnel_en_decimal(r: &Rationnel, digits: usize) -> String {
    // BigInt `/` tronque vers zéro
    let scaled = (r.numerateur() * pow10(digits)) / r.denominateur();
    scaled_to_decimal(scaled, digits, r.est_negatif())
}

/// Une ligne par rangée, valeurs décimales séparées par un espace.
pub fn matrice_en_decimal(m: &Matrice, digits: usize) -> String {
    m.valeurs()
        .iter()
        .map(|l| {
            l.iter()
                .map(|x| rationnel_en_decimal(x, digits))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn solutions_en_decimal(solutions: &[Rationnel], digits: usize) -> String {
    solutions
        .iter()
        .enumerate()
        .map(|(i, x)| format!("x_{} ≈ {}", i + 1, rationnel_en_decimal(x, digits)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rationnel {
        Rationnel::fraction(n, d).unwrap()
    }

    #[test]
    fn troncature() {
        assert_eq!(rationnel_en_decimal(&q(1, 3), 5), "0.33333");
        assert_eq!(rationnel_en_decimal(&q(2, 3), 3), "0.666");
        assert_eq!(rationnel_en_decimal(&q(-1, 3), 2), "-0.33");
        assert_eq!(rationnel_en_decimal(&q(-7, 2), 0), "-3");
        assert_eq!(rationnel_en_decimal(&q(1, 40), 4), "0.0250");
        assert_eq!(rationnel_en_decimal(&q(5, 1), 2), "5.00");
    }

    #[test]
    fn matrice_et_solutions() {
        let m = Matrice::depuis_lignes(vec![vec![q(1, 2), q(-1, 4)]]).unwrap();
        assert_eq!(matrice_en_decimal(&m, 2), "0.50 -0.25");
        assert_eq!(solutions_en_decimal(&[q(1, 8)], 3), "x_1 ≈ 0.125");
    }
}
