use crate::error::{ShareFmtError, ShareFmtResult};
use crate::hash::DataHash;
use crate::share::{Namespace, Share};

/// Capability boundary to the namespaced Merkle tree.
///
/// The tree construction and proof verification live outside this core;
/// implementors wrap whatever NMT library the node runs and answer whether
/// `proof` attests that `shares` are included under `root` for
/// `namespace`.
pub trait InclusionVerifier {
    /// Opaque proof produced by the tree.
    type Proof;

    /// Verifies that the ordered `shares` are included under `root` within
    /// `namespace`, as attested by `proof`.
    fn verify(
        &self,
        namespace: &Namespace,
        shares: &[Share],
        proof: &Self::Proof,
        root: &DataHash,
    ) -> bool;
}

/// The projection of one data-square row onto a namespace.
///
/// An ordered sequence of shares, all carrying the same namespace prefix,
/// paired with the externally-produced proof of their inclusion under the
/// row's root. Construction happens in the sampling/query component that
/// fetched the row; this core only defines the shape and the checks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamespacedRow<P> {
    shares: Vec<Share>,
    proof: P,
}

impl<P> NamespacedRow<P> {
    /// Constructs a new row from ordered shares and their proof.
    pub fn new(shares: Vec<Share>, proof: P) -> Self {
        Self { shares, proof }
    }

    /// Gets the ordered shares of the row.
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Gets the inclusion proof.
    pub fn proof(&self) -> &P {
        &self.proof
    }

    /// Decomposes the row into its shares and proof.
    pub fn into_parts(self) -> (Vec<Share>, P) {
        (self.shares, self.proof)
    }

    /// Checks that every share in the row carries `namespace` as its
    /// prefix.
    ///
    /// A row failing this is malformed regardless of what its proof says,
    /// and must be rejected rather than passed on.
    pub fn check_namespace(&self, namespace: &Namespace) -> ShareFmtResult<()> {
        for (index, share) in self.shares.iter().enumerate() {
            if share.namespace() != *namespace {
                return Err(ShareFmtError::NamespaceMismatch { index });
            }
        }
        Ok(())
    }

    /// Verifies the row against a row root.
    ///
    /// Checks the namespace prefixes locally, then delegates proof
    /// verification to the external tree capability. A negative verdict
    /// from the verifier surfaces as [`ShareFmtError::InvalidProof`].
    pub fn verify_inclusion<V>(
        &self,
        verifier: &V,
        namespace: &Namespace,
        row_root: &DataHash,
    ) -> ShareFmtResult<()>
    where
        V: InclusionVerifier<Proof = P>,
    {
        self.check_namespace(namespace)?;
        if !verifier.verify(namespace, &self.shares, &self.proof, row_root) {
            return Err(ShareFmtError::InvalidProof);
        }
        Ok(())
    }
}

/// All shares with proofs within one namespace of an extended data square.
///
/// Rows are ordered by row index ascending, one entry per row of the
/// square that contains at least one share for the namespace; the
/// producing component is responsible for that ordering. An empty sequence
/// is valid and means the namespace is absent from the square.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NamespacedShares<P>(Vec<NamespacedRow<P>>);

impl<P> NamespacedShares<P> {
    /// Constructs a new instance from rows already ordered by row index.
    pub fn new(rows: Vec<NamespacedRow<P>>) -> Self {
        Self(rows)
    }

    /// Gets the rows, ordered by row index ascending.
    pub fn rows(&self) -> &[NamespacedRow<P>] {
        &self.0
    }

    /// Returns the number of rows that contain the namespace.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the namespace is absent from the square.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, NamespacedRow<P>> {
        self.0.iter()
    }
}

impl<P> From<Vec<NamespacedRow<P>>> for NamespacedShares<P> {
    fn from(rows: Vec<NamespacedRow<P>>) -> Self {
        Self(rows)
    }
}

impl<P> IntoIterator for NamespacedShares<P> {
    type Item = NamespacedRow<P>;
    type IntoIter = std::vec::IntoIter<NamespacedRow<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a NamespacedShares<P> {
    type Item = &'a NamespacedRow<P>;
    type IntoIter = std::slice::Iter<'a, NamespacedRow<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
