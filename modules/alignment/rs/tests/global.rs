use eyre::Result;

use pairstack_alignment_rs::pairwise::nw::{self, Aligner, Algorithm};
use pairstack_alignment_rs::pairwise::{scoring, Alignment};
use pairstack_core_rs::seq;

struct Workload<'a> {
    target: &'a [u8],
    query: &'a [u8],
    score: f64,
    rle: &'a str,
}

fn ensure(aligner: &impl Aligner<Score = f64>, w: Workload<'_>) {
    let aln = aligner.align(w.target, w.query);
    assert_eq!(*aln.score(), w.score, "{}", aln);
    assert_eq!(aln.rle(), w.rle, "{}", aln);

    // Both inputs are fully consumed and no column is gap-only
    assert_eq!(aln.query().len(), aln.reference().len());
    assert_eq!(aln.query_seq(), w.query);
    assert_eq!(aln.reference_seq(), w.target);
    assert!(aln
        .query()
        .iter()
        .zip(aln.reference())
        .all(|(q, r)| !(seq::is_gap(*q) && seq::is_gap(*r))));
}

#[test]
fn test_simple() {
    let aligner = nw::Simple::<f64>::default();
    for w in [
        Workload {
            target: b"GATTACA",
            query: b"GCATGCU",
            score: -6.0,
            rle: "1=1I1=1D1=1X1=1X",
        },
        Workload {
            target: b"ACGT",
            query: b"",
            score: -4.0,
            rle: "4D",
        },
        Workload {
            target: b"",
            query: b"ACGT",
            score: -4.0,
            rle: "4I",
        },
        Workload {
            target: b"ACGTAC",
            query: b"ACAC",
            score: -2.0,
            rle: "2=2D2=",
        },
    ] {
        ensure(&aligner, w);
    }
}

#[test]
fn test_affine() {
    let aligner = nw::Affine::<f64>::default();
    for w in [
        Workload {
            target: b"GATTACA",
            query: b"GCATGCU",
            score: -4.0,
            rle: "1=2X1=1X1=1X",
        },
        Workload {
            target: b"ACGTACGT",
            query: b"ACGTTTACGT",
            score: -1.5,
            rle: "3=2I5=",
        },
        Workload {
            target: b"ACGTTTTACGT",
            query: b"ACGTACGT",
            score: -2.0,
            rle: "3=3D5=",
        },
        Workload {
            target: b"ACGT",
            query: b"",
            score: -2.5,
            rle: "4D",
        },
    ] {
        ensure(&aligner, w);
    }
}

#[test]
fn test_identity() {
    for matched in [0.0, 1.0, 2.5] {
        let simple = nw::Simple::new(scoring::Linear::new(matched, -2.0, -1.0, -1.0));
        let affine = nw::Affine::new(scoring::Affine::new(matched, -1.0, -1.0, -0.5, 0.0));
        let algorithms = [Algorithm::Simple(simple), Algorithm::Affine(affine)];

        let sequences: [&[u8]; 3] = [b"A", b"ACGT", b"TTTTGGGGCCCCAAAA"];
        for sequence in sequences {
            for algorithm in &algorithms {
                let aln = algorithm.align(sequence, sequence);
                assert_eq!(*aln.score(), sequence.len() as f64 * matched);
                assert_eq!(aln.query(), sequence);
                assert_eq!(aln.reference(), sequence);
            }
        }
    }
}

#[test]
fn test_affine_single_run() {
    let (open, extend) = (-3.0, -0.5);
    let aligner = nw::Affine::new(scoring::Affine::new(1.0, -4.0, open, extend, 0.0));

    let target = b"ACGTACGTAC";
    for k in 1..=4 {
        // Insert a run of k symbols in the middle of the target
        let mut query = target[..5].to_vec();
        query.extend(std::iter::repeat_n(b'T', k));
        query.extend_from_slice(&target[5..]);

        let aln = aligner.align(target, &query);
        let expected = target.len() as f64 + open + (k - 1) as f64 * extend;
        assert_eq!(*aln.score(), expected, "{}", aln);
        assert_eq!(seq::count_bases(aln.reference()), target.len());
        assert_eq!(aln.reference().len() - target.len(), k);
    }
}

#[test]
fn test_alignment_records() -> Result<()> {
    let aln = Alignment::new("read/R", b"AC-T".to_vec(), b"ACGT".to_vec(), -1.0)?;
    assert_eq!(aln.rle(), "2=1D1=");
    assert!(Alignment::new("read", b"AC".to_vec(), b"ACGT".to_vec(), 0.0).is_err());
    Ok(())
}
