//! Tests fuzz safe : invariants algébriques sur matrices pseudo-aléatoires.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées (Laplace est factoriel)
//! - budget temps global
//! - erreurs attendues : Singuliere / PivotNul selon la matrice tirée

use std::time::{Duration, Instant};

use super::operations::{additionner, multiplier, soustraire};
use super::*;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_rat(rng: &mut Rng) -> Rationnel {
    // petits numérateurs signés (incluant 0 : pivots nuls fréquents), dénominateurs 1..=4
    let n = rng.pick(11) as i64 - 5;
    let d = rng.pick(4) as i64 + 1;
    Rationnel::fraction(n, d).unwrap()
}

fn gen_matrice(rng: &mut Rng, lignes: usize, colonnes: usize) -> Matrice {
    let valeurs = (0..lignes)
        .map(|_| (0..colonnes).map(|_| gen_rat(rng)).collect())
        .collect();
    Matrice::nouvelle(lignes, colonnes, valeurs).unwrap()
}

fn gen_taille(rng: &mut Rng) -> usize {
    rng.pick(4) as usize + 1
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_somme_difference() {
    let start = Instant::now();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..300 {
        budget(start, Duration::from_secs(10));
        let (l, c) = (gen_taille(&mut rng), gen_taille(&mut rng));
        let a = gen_matrice(&mut rng, l, c);
        let b = gen_matrice(&mut rng, l, c);
        let s = additionner(&a, &b).unwrap();
        assert_eq!(soustraire(&s, &b).unwrap(), a);
        assert_eq!(s, additionner(&b, &a).unwrap());
    }
}

#[test]
fn fuzz_inverses() {
    let start = Instant::now();
    let mut rng = Rng::new(42);
    let mut inversibles = 0;

    for _ in 0..200 {
        budget(start, Duration::from_secs(20));
        let n = gen_taille(&mut rng);
        let a = gen_matrice(&mut rng, n, n);
        let det = determinant(&a).unwrap();

        let adj = inverser(&a, MethodeInversion::Adjointe);
        let gj = inverser(&a, MethodeInversion::GaussJordan);

        if det.est_nul() {
            assert_eq!(adj.unwrap_err(), ErreurNoyau::Singuliere);
            assert_eq!(gj.unwrap_err(), ErreurNoyau::Singuliere);
            continue;
        }

        inversibles += 1;
        let (inv, _) = adj.unwrap_or_else(|e| panic!("adjointe: {e}\n{}", a.rendu()));
        let (p, _) = multiplier(&a, &inv).unwrap();
        assert_eq!(p, Matrice::identite(n), "A·A⁻¹ ≠ I pour\n{}", a.rendu());

        match gj {
            Ok((inv_gj, _)) => assert_eq!(inv_gj, inv),
            // sans échange, un pivot nul reste possible sur une matrice inversible
            Err(ErreurNoyau::PivotNul { .. }) => {}
            Err(e) => panic!("gauss-jordan: erreur inattendue {e}"),
        }
    }

    assert!(inversibles > 50, "trop peu de matrices inversibles: {inversibles}");
}

#[test]
fn fuzz_determinant_transposee() {
    let start = Instant::now();
    let mut rng = Rng::new(7);

    for _ in 0..200 {
        budget(start, Duration::from_secs(10));
        let n = gen_taille(&mut rng);
        let a = gen_matrice(&mut rng, n, n);
        assert_eq!(
            determinant(&a).unwrap(),
            determinant(&a.transposee()).unwrap()
        );
    }
}

#[test]
fn fuzz_cramer_contre_reduction() {
    let start = Instant::now();
    let mut rng = Rng::new(2024);
    let mut compares = 0;

    for _ in 0..200 {
        budget(start, Duration::from_secs(20));
        let n = gen_taille(&mut rng);
        let s = gen_matrice(&mut rng, n, n + 1);

        let cramer = resoudre_cramer(&s);
        let gauss = reduire(&s);

        match (cramer, gauss) {
            (Ok((x, _)), Ok((r, _))) => {
                assert_eq!(x, solutions(&r), "système:\n{}", s.rendu());
                compares += 1;
            }
            // det(A) = 0 : aucune colonne pivot récupérable dans la partie A
            (Err(ErreurNoyau::Singuliere), Err(ErreurNoyau::PivotNul { .. })) => {}
            (c, g) => panic!(
                "désaccord cramer={:?} gauss={:?}\n{}",
                c.err(),
                g.err(),
                s.rendu()
            ),
        }
    }

    assert!(compares > 50, "trop peu de systèmes comparés: {compares}");
}

#[test]
fn fuzz_reduction_idempotente() {
    let start = Instant::now();
    let mut rng = Rng::new(99);

    for _ in 0..200 {
        budget(start, Duration::from_secs(10));
        let (l, c) = (gen_taille(&mut rng), gen_taille(&mut rng) + 1);
        let m = gen_matrice(&mut rng, l, c);
        if let Ok((r, _)) = reduire(&m) {
            let (r2, _) = reduire(&r).unwrap();
            assert_eq!(r, r2);
        }
    }
}
