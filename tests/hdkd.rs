// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration tests for hdkd, including the published BIP32
//! reference vectors.

use hdkd::{HdError, HdNode, BITCOIN};

/// Checks one published seed/path/extended-key triple: the derived
/// node must encode to the exact expected strings, and both strings
/// must decode back to the node and its neutered twin.
fn check_vector(seed: &str, path: &str, expected_private: &str, expected_public: &str) {
    let seed = hex::decode(seed).unwrap();
    let master = HdNode::from_seed(&seed, &BITCOIN).unwrap();
    let node = master.derive_path(path, &BITCOIN).unwrap();

    assert_eq!(node.encode_private(&BITCOIN).unwrap(), expected_private);
    assert_eq!(node.encode_public(&BITCOIN), expected_public);

    let decoded = HdNode::decode(expected_private, &BITCOIN).unwrap();
    assert_eq!(decoded, node);

    let decoded = HdNode::decode(expected_public, &BITCOIN).unwrap();
    assert_eq!(decoded, node.neuter().unwrap());
}

#[test]
fn bip32_reference_vector_1() {
    let seed = "000102030405060708090a0b0c0d0e0f";

    check_vector(
        seed, "m",
        "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi",
        "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8",
    );
    check_vector(
        seed, "m/0'",
        "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7",
        "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw",
    );
    check_vector(
        seed, "m/0'/1",
        "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs",
        "xpub6ASuArnXKPbfEwhqN6e3mwBcDTgzisQN1wXN9BJcM47sSikHjJf3UFHKkNAWbWMiGj7Wf5uMash7SyYq527Hqck2AxYysAA7xmALppuCkwQ",
    );
    check_vector(
        seed, "m/0'/1/2'",
        "xprv9z4pot5VBttmtdRTWfWQmoH1taj2axGVzFqSb8C9xaxKymcFzXBDptWmT7FwuEzG3ryjH4ktypQSAewRiNMjANTtpgP4mLTj34bhnZX7UiM",
        "xpub6D4BDPcP2GT577Vvch3R8wDkScZWzQzMMUm3PWbmWvVJrZwQY4VUNgqFJPMM3No2dFDFGTsxxpG5uJh7n7epu4trkrX7x7DogT5Uv6fcLW5",
    );
    check_vector(
        seed, "m/0'/1/2'/2",
        "xprvA2JDeKCSNNZky6uBCviVfJSKyQ1mDYahRjijr5idH2WwLsEd4Hsb2Tyh8RfQMuPh7f7RtyzTtdrbdqqsunu5Mm3wDvUAKRHSC34sJ7in334",
        "xpub6FHa3pjLCk84BayeJxFW2SP4XRrFd1JYnxeLeU8EqN3vDfZmbqBqaGJAyiLjTAwm6ZLRQUMv1ZACTj37sR62cfN7fe5JnJ7dh8zL4fiyLHV",
    );
    check_vector(
        seed, "m/0'/1/2'/2/1000000000",
        "xprvA41z7zogVVwxVSgdKUHDy1SKmdb533PjDz7J6N6mV6uS3ze1ai8FHa8kmHScGpWmj4WggLyQjgPie1rFSruoUihUZREPSL39UNdE3BBDu76",
        "xpub6H1LXWLaKsWFhvm6RVpEL9P4KfRZSW7abD2ttkWP3SSQvnyA8FSVqNTEcYFgJS2UaFcxupHiYkro49S8yGasTvXEYBVPamhGW6cFJodrTHy",
    );
}

#[test]
fn bip32_reference_vector_2() {
    let seed = "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a29f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542";

    check_vector(
        seed, "m",
        "xprv9s21ZrQH143K31xYSDQpPDxsXRTUcvj2iNHm5NUtrGiGG5e2DtALGdso3pGz6ssrdK4PFmM8NSpSBHNqPqm55Qn3LqFtT2emdEXVYsCzC2U",
        "xpub661MyMwAqRbcFW31YEwpkMuc5THy2PSt5bDMsktWQcFF8syAmRUapSCGu8ED9W6oDMSgv6Zz8idoc4a6mr8BDzTJY47LJhkJ8UB7WEGuduB",
    );
    check_vector(
        seed, "m/0",
        "xprv9vHkqa6EV4sPZHYqZznhT2NPtPCjKuDKGY38FBWLvgaDx45zo9WQRUT3dKYnjwih2yJD9mkrocEZXo1ex8G81dwSM1fwqWpWkeS3v86pgKt",
        "xpub69H7F5d8KSRgmmdJg2KhpAK8SR3DjMwAdkxj3ZuxV27CprR9LgpeyGmXUbC6wb7ERfvrnKZjXoUmmDznezpbZb7ap6r1D3tgFxHmwMkQTPH",
    );
    check_vector(
        seed, "m/0/2147483647'",
        "xprv9wSp6B7kry3Vj9m1zSnLvN3xH8RdsPP1Mh7fAaR7aRLcQMKTR2vidYEeEg2mUCTAwCd6vnxVrcjfy2kRgVsFawNzmjuHc2YmYRmagcEPdU9",
        "xpub6ASAVgeehLbnwdqV6UKMHVzgqAG8Gr6riv3Fxxpj8ksbH9ebxaEyBLZ85ySDhKiLDBrQSARLq1uNRts8RuJiHjaDMBU4Zn9h8LZNnBC5y4a",
    );
    check_vector(
        seed, "m/0/2147483647'/1",
        "xprv9zFnWC6h2cLgpmSA46vutJzBcfJ8yaJGg8cX1e5StJh45BBciYTRXSd25UEPVuesF9yog62tGAQtHjXajPPdbRCHuWS6T8XA2ECKADdw4Ef",
        "xpub6DF8uhdarytz3FWdA8TvFSvvAh8dP3283MY7p2V4SeE2wyWmG5mg5EwVvmdMVCQcoNJxGoWaU9DCWh89LojfZ537wTfunKau47EL2dhHKon",
    );
    check_vector(
        seed, "m/0/2147483647'/1/2147483646'",
        "xprvA1RpRA33e1JQ7ifknakTFpgNXPmW2YvmhqLQYMmrj4xJXXWYpDPS3xz7iAxn8L39njGVyuoseXzU6rcxFLJ8HFsTjSyQbLYnMpCqE2VbFWc",
        "xpub6ERApfZwUNrhLCkDtcHTcxd75RbzS1ed54G1LkBUHQVHQKqhMkhgbmJbZRkrgZw4koxb5JaHWkY4ALHY2grBGRjaDMzQLcgJvLJuZZvRcEL",
    );
    check_vector(
        seed, "m/0/2147483647'/1/2147483646'/2",
        "xprvA2nrNbFZABcdryreWet9Ea4LvTJcGsqrMzxHx98MMrotbir7yrKCEXw7nadnHM8Dq38EGfSh6dqA9QWTyefMLEcBYJUuekgW4BYPJcr9E7j",
        "xpub6FnCn6nSzZAw5Tw7cgR9bi15UV96gLZhjDstkXXxvCLsUXBGXPdSnLFbdpq8p9HmGsApME5hQTZ3emM2rnY5agb9rXpVGyy3bdW6EEgAtqt",
    );
}

// Vector 3 exercises private keys with leading zero bytes, which must
// survive serialization unpadded.
#[test]
fn bip32_reference_vector_3() {
    let seed = "4b381541583be4423346c643850da4b320e46a87ae3d2a4e6da11eba819cd4acba45d239319ac14f863b8d5ab5a0d0c64d2e8a1e7d1457df2e5a3c51c73235be";

    check_vector(
        seed, "m",
        "xprv9s21ZrQH143K25QhxbucbDDuQ4naNntJRi4KUfWT7xo4EKsHt2QJDu7KXp1A3u7Bi1j8ph3EGsZ9Xvz9dGuVrtHHs7pXeTzjuxBrCmmhgC6",
        "xpub661MyMwAqRbcEZVB4dScxMAdx6d4nFc9nvyvH3v4gJL378CSRZiYmhRoP7mBy6gSPSCYk6SzXPTf3ND1cZAceL7SfJ1Z3GC8vBgp2epUt13",
    );
    check_vector(
        seed, "m/0'",
        "xprv9uPDJpEQgRQfDcW7BkF7eTya6RPxXeJCqCJGHuCJ4GiRVLzkTXBAJMu2qaMWPrS7AANYqdq6vcBcBUdJCVVFceUvJFjaPdGZ2y9WACViL4L",
        "xpub68NZiKmJWnxxS6aaHmn81bvJeTESw724CRDs6HbuccFQN9Ku14VQrADWgqbhhTHBaohPX4CjNLf9fq9MYo6oDaPPLPxSb7gwQN3ih19Zm4Y",
    );
}

#[test]
fn parent_child_fingerprint_linkage() {
    let master = HdNode::from_seed(&[9u8; 32], &BITCOIN).unwrap();

    let mut parent = master;
    for index in [0u32, 1, 44, 1000] {
        let child = parent.derive_child(index, false, &BITCOIN).unwrap();
        assert_eq!(
            child.parent_fingerprint(),
            u32::from_be_bytes(parent.fingerprint())
        );
        parent = child;
    }
}

#[test]
fn neutered_subtree_tracks_private_subtree() {
    let master = HdNode::from_seed(&[9u8; 32], &BITCOIN).unwrap();
    let watch_only = master.neuter().unwrap();

    let mut private_node = master;
    let mut public_node = watch_only;
    for index in [0u32, 3, 7] {
        private_node = private_node.derive_child(index, false, &BITCOIN).unwrap();
        public_node = public_node.derive_child(index, false, &BITCOIN).unwrap();

        assert_eq!(public_node.public_key(), private_node.public_key());
        assert_eq!(public_node.chain_code(), private_node.chain_code());
        assert!(public_node.is_neutered());
    }
}

#[test]
fn hardened_children_are_sealed_from_public_observers() {
    let master = HdNode::from_seed(&[9u8; 32], &BITCOIN).unwrap();
    let watch_only = master.neuter().unwrap();

    assert_eq!(
        watch_only.derive_child(0, true, &BITCOIN),
        Err(HdError::DeriveHardenedFromNeutered)
    );

    // A hardened child and a normal child at the same base index are
    // unrelated nodes.
    let hardened = master.derive_child(0, true, &BITCOIN).unwrap();
    let normal = master.derive_child(0, false, &BITCOIN).unwrap();
    assert_ne!(hardened.public_key(), normal.public_key());
}

#[test]
fn extended_keys_are_portable_across_nodes() {
    let master = HdNode::from_seed(&[9u8; 32], &BITCOIN).unwrap();
    let account = master.derive_path("m/44'/0'/0'", &BITCOIN).unwrap();

    // Ship the neutered account key to a watch-only consumer and keep
    // deriving receive addresses on both sides.
    let exported = account.neuter().unwrap().encode_public(&BITCOIN);
    let imported = HdNode::decode(&exported, &BITCOIN).unwrap();

    let local = account.derive_path("0/5", &BITCOIN).unwrap();
    let remote = imported.derive_path("0/5", &BITCOIN).unwrap();
    assert_eq!(local.public_key(), remote.public_key());
    assert_eq!(local.fingerprint(), remote.fingerprint());
}
