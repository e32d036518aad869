use arbitrary::{Arbitrary, Unstructured};

use das_params::{NAMESPACE_SIZE, SHARE_SIZE};

use crate::hash::{DataHash, HASH_SIZE};
use crate::share::{Namespace, Share};

impl<'a> Arbitrary<'a> for DataHash {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(DataHash::new(<[u8; HASH_SIZE]>::arbitrary(u)?))
    }
}

impl<'a> Arbitrary<'a> for Namespace {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Namespace::new(<[u8; NAMESPACE_SIZE]>::arbitrary(u)?))
    }
}

impl<'a> Arbitrary<'a> for Share {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut buf = [0u8; SHARE_SIZE];
        u.fill_buffer(&mut buf)?;
        Ok(Share::new(buf))
    }
}
