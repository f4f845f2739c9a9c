// src/noyau/rationnel.rs
//
// Rationnel exact (big int), forme canonique :
// - pgcd(num, den) = 1
// - den > 0 (le signe vit sur le numérateur)
//
// + − × ne peuvent pas échouer ; ÷ passe par `diviser` (division par 0 => erreur,
// jamais de panique).

use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::erreur::{ErreurNoyau, ResultatNoyau};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rationnel(BigRational);

impl Rationnel {
    /// num/den réduit. Échoue si den = 0.
    pub fn reduire(num: BigInt, den: BigInt) -> ResultatNoyau<Self> {
        if den.is_zero() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        // Ratio::new réduit et ramène le signe sur le numérateur.
        Ok(Self(BigRational::new(num, den)))
    }

    pub fn fraction(num: i64, den: i64) -> ResultatNoyau<Self> {
        Self::reduire(BigInt::from(num), BigInt::from(den))
    }

    pub fn entier(n: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn un() -> Self {
        Self(BigRational::one())
    }

    pub fn est_nul(&self) -> bool {
        self.0.is_zero()
    }

    pub fn est_entier(&self) -> bool {
        self.0.is_integer()
    }

    pub fn est_negatif(&self) -> bool {
        self.0.is_negative()
    }

    pub fn numerateur(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominateur(&self) -> &BigInt {
        self.0.denom()
    }

    /// Division exacte. Diviseur nul => DivisionParZero.
    pub fn diviser(&self, diviseur: &Rationnel) -> ResultatNoyau<Self> {
        if diviseur.est_nul() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        Ok(Self(&self.0 / &diviseur.0))
    }

    /// (−1)^k
    pub fn signe_alterne(k: usize) -> Self {
        if k % 2 == 0 {
            Self::un()
        } else {
            -Self::un()
        }
    }
}

impl From<i64> for Rationnel {
    fn from(n: i64) -> Self {
        Self::entier(n)
    }
}

impl From<BigRational> for Rationnel {
    fn from(r: BigRational) -> Self {
        Self(r)
    }
}

/* ------------------------ Opérateurs (toujours sûrs) ------------------------ */

macro_rules! operateur_exact {
    ($tr:ident, $m:ident) => {
        impl $tr<&Rationnel> for &Rationnel {
            type Output = Rationnel;
            fn $m(self, rhs: &Rationnel) -> Rationnel {
                Rationnel($tr::$m(&self.0, &rhs.0))
            }
        }

        impl $tr<Rationnel> for Rationnel {
            type Output = Rationnel;
            fn $m(self, rhs: Rationnel) -> Rationnel {
                Rationnel($tr::$m(self.0, rhs.0))
            }
        }

        impl $tr<&Rationnel> for Rationnel {
            type Output = Rationnel;
            fn $m(self, rhs: &Rationnel) -> Rationnel {
                Rationnel($tr::$m(&self.0, &rhs.0))
            }
        }
    };
}

operateur_exact!(Add, add);
operateur_exact!(Sub, sub);
operateur_exact!(Mul, mul);

impl Neg for Rationnel {
    type Output = Rationnel;
    fn neg(self) -> Rationnel {
        Rationnel(-self.0)
    }
}

impl Neg for &Rationnel {
    type Output = Rationnel;
    fn neg(self) -> Rationnel {
        Rationnel(-&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rationnel {
        Rationnel::fraction(n, d).unwrap()
    }

    #[test]
    fn reduction_canonique() {
        let r = q(6, -8);
        assert_eq!(r.numerateur(), &BigInt::from(-3));
        assert_eq!(r.denominateur(), &BigInt::from(4));
        assert_eq!(q(2, 4), q(1, 2));
        assert_eq!(q(0, -5), Rationnel::zero());
    }

    #[test]
    fn denominateur_nul_refuse() {
        assert_eq!(Rationnel::fraction(1, 0), Err(ErreurNoyau::DivisionParZero));
    }

    #[test]
    fn arithmetique_exacte() {
        assert_eq!(q(1, 2) + q(1, 3), q(5, 6));
        assert_eq!(q(1, 2) - q(1, 3), q(1, 6));
        assert_eq!(&q(2, 3) * &q(3, 4), q(1, 2));
        assert_eq!(q(1, 2).diviser(&q(1, 4)).unwrap(), Rationnel::from(2));
        assert_eq!(-q(1, 2), q(-1, 2));
    }

    #[test]
    fn division_par_zero_refusee() {
        assert_eq!(
            q(1, 2).diviser(&Rationnel::zero()),
            Err(ErreurNoyau::DivisionParZero)
        );
    }

    #[test]
    fn pas_de_debordement() {
        // 2^200 / 3^100 : impossible en i64, trivial en big int
        let mut r = Rationnel::un();
        for _ in 0..200 {
            r = r * Rationnel::from(2);
        }
        for _ in 0..100 {
            r = r.diviser(&Rationnel::from(3)).unwrap();
        }
        assert!(r.denominateur() > &BigInt::from(i64::MAX));
        assert!(!r.est_entier());
    }
}
