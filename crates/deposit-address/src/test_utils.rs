//! Test fixtures shared across modules.
//!
//! The known-answer vectors below are shared with the other implementations of the protocol.
//! Inputs are not stored; they are regenerated from a SHA-256 hash chain seeded with a fixed
//! label.

use bitcoin::{
    key::rand::rngs::OsRng,
    secp256k1::{SecretKey, SECP256K1},
};
use sha2::{Digest, Sha256};

use crate::{
    segwit_tweak::DepositPublicKey,
    types::{AuxData, ChainId, EvmAddress},
};

/// Returns `sha256(data)`.
pub(crate) fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Generates a random key pair.
pub(crate) fn generate_keypair() -> (DepositPublicKey, SecretKey) {
    let sk = SecretKey::new(&mut OsRng);
    (DepositPublicKey::from(sk.public_key(SECP256K1)), sk)
}

/// Seed label for the segwit tweak vectors.
const SEGWIT_TWEAK_SEED: &[u8] = b"segwit_tweak_test_rs";

/// Seed label for the EVM deposit vectors.
const EVM_DEPOSIT_SEED: &[u8] = b"segwit_lombard_tweak_test_rs";

/// Tweaked public keys for [`segwit_kat_inputs`].
const SEGWIT_TWEAK_KATS: [&str; 32] = [
    "0313774466ebbc111274dab2b4d1b6eac4f6f3a111db73fa4ff3eac66c20169a23",
    "02aa2d51f3f3e92626aa5bfd141d974096fd58925b06473e9bb4260852edfbfa46",
    "0341d9fbd191a43122c386d1c9991062de44c0c8847490fb7bb9a17b44b507aede",
    "0334492cdac9bcb31bb27cc6dc9ce70ff5b52ac5b78d4589f751469559bfa5ec4a",
    "036cd9a04d82139aa35a0c36da34241aab6aca9003f12db084a8b5717731e9847d",
    "02f5780553af7712e3b24e6ccdcf0e077f8c30a779e0d81d9ec0be09fe631921ea",
    "039c19dee46fa2365da29e77a94b33ead07a7db3300c348c7bfa82fd89ba989ad3",
    "03db022c98985fc32421e1cf05bcc644d6cc0af8abbc4b0446fe78842f94c680ee",
    "027a90040d3e6088fc6562321c9b0650dabdff0ef4381a4eacdeca73ffc3764e01",
    "0228393ede642522aa0ca3152e132c185dda0571d4576258cd5129ad26fb24cea8",
    "0276bf1e4207c9b491255a841cd94314c991379f699d4844e6827ee92bbe91355a",
    "03ceb6f23756f1cfdf4283da15829b42aef941362f2fe675d9806b836f43ec6cef",
    "03ef806e702b73b466e55d624a58dcde90389d19b07cb1c8093b6c8ad32ea56ef5",
    "025a6550a5f897e3bc2d2c0a890f56c1ab01ff9f020f3766cb451f62089c9e32c2",
    "03e6efdb95f08c94175120f2c6d788675ac86bf993c214ecd3de335600dad1be41",
    "028cacea94118112577050bfe99bb868bc9d2016bebce460fac2c1a8e824fd67bf",
    "029ffc284aeb58088c699c15355285ef69b0e9682d4345db84d75626d279a5a8cd",
    "02840cdcadd09695927aea95da4c61af3861f805ef8d9e6242c952284ec6f05684",
    "02c1f4816c3485cf79e9aeb4ea4dc44d104880c0a4df6e599d81ca59fc8d1449b6",
    "029077f3d1c9aeb621cfb3fef8e18231e9f2e73f9af2ce2cc2ab9dbab18264bb09",
    "037cfb969efeca8eb8200f67c416cb00aaf50294c3692e262a411770018ff1a91a",
    "02e2a3ef2fc61ece6e5bc7e4a35e6420e39af1d834c3fe3227b6a95e3621a09819",
    "031b71237447276eb44ea8042d57e466187f513b32003b0aa01c483d7181e08c20",
    "0340b92b55beefeacb7ffd4158c640ba65a9a3c392ac71d0878e89952bf5bdfad4",
    "0363dd621a75295c3a94914edcc5ad92246ef07871ee1775adafbf0f9a263209be",
    "022fbc138f112f0c09c548840268588b899e1541f7e353f31c83df96ef71105646",
    "02438d1c97aba03f083fbb9aa2968ab21b32b9765cb3aebd8f4307a85a0c1d0fb4",
    "032d74810eb759fd94c67728d7cd604358f534a8e1e618859f83505040f1028f2b",
    "03dae9b02ffcd698ddc2105d06d738a88ac1ce53a63cee57a499ef855234447ac6",
    "03d5efdf20f0172f45dbeb84c6217bc2834a2b3b012dd681f3fc54e89d15269279",
    "036b9e2411128b4d7bad762484f0612be54ef9a20806358cd218cb066be4747022",
    "03e918aaa0de64b97974e3d644911d445fc4d0a9970130ec2d31a2170975e02d20",
];

/// Returns the master key and `(tweak, expected tweaked key)` pairs for the segwit tweak vectors.
///
/// The master secret is `sha256(seed)`. Each tweak is the next link of the hash chain.
pub(crate) fn segwit_kat_inputs() -> (DepositPublicKey, Vec<([u8; 32], &'static str)>) {
    let mut hash = sha256(SEGWIT_TWEAK_SEED);
    let sk = SecretKey::from_slice(&hash).expect("seed hash is a valid secret key");
    let pk = DepositPublicKey::from(sk.public_key(SECP256K1));

    let vectors = SEGWIT_TWEAK_KATS
        .iter()
        .map(|expected| {
            hash = sha256(&hash);
            (hash, *expected)
        })
        .collect();

    (pk, vectors)
}

/// Expected outputs of one EVM deposit vector.
#[derive(Debug)]
pub(crate) struct EvmKat {
    pub(crate) tweak: &'static str,
    pub(crate) pubkey: &'static str,
    pub(crate) address: &'static str,
}

/// Inputs of one EVM deposit vector.
#[derive(Debug)]
pub(crate) struct EvmKatInputs {
    pub(crate) bridge: EvmAddress,
    pub(crate) wallet: EvmAddress,
    pub(crate) chain_id: ChainId,
    pub(crate) aux_data: AuxData,
}

/// EVM deposit vectors, addresses encoded for signet.
const EVM_KATS: [EvmKat; 32] = [
    EvmKat {
        tweak: "16fd25f94eb4f407ceef1c5f07085c6b157dc77edfce320a14037807004913fd",
        pubkey: "02cd8d971536d4dc336efdddcaab05c1342f0c503abb4b3203c99c8a8b673e3b52",
        address: "tb1qxhyzcnf9dmpy4tdd6av9an8xa49g6sqnrjr29m",
    },
    EvmKat {
        tweak: "359133a06072e4f525eff163f47e92033ee2035bb071244b6f5239942df94142",
        pubkey: "037f2ce3ae0dfe10cd70fe53f0242eebffc48eb1ce51db8a4a1666431f4147290d",
        address: "tb1qun448c6tw64ljdqs5chcywh7c29ev73u74ee2s",
    },
    EvmKat {
        tweak: "c7b2b3bcd871c0417ba1d2fd3e4d41c6464e82db155b483efa023bd6a4d343b3",
        pubkey: "034834c293e3ae90ff8ceb2aa884a9f949a798da7f1415c0d41699c6f08103bcb7",
        address: "tb1qf70dvyyq9d9x3qlkr26epl5zm34gku2qm9cxq5",
    },
    EvmKat {
        tweak: "c578601ffa301acc6ac8d0b5a32e797623bcc6098ab4363486026e7daa8ec473",
        pubkey: "03bcb3a6c4c00981c8dae95e67fdeb3721a5ee7672783dbb13b5831e33d40fd524",
        address: "tb1qv5a4fkh8ufqqnxslrtz7stt50hrh84a3ha3fva",
    },
    EvmKat {
        tweak: "a3c3c72799a9148d3798b9ff134831ae08888bf4a7ef7d88c72097aee9d35a0d",
        pubkey: "030bc391ddd78147a9f069af05ef71647a85c35eb6c2e6ee4e933623c0d6ad3160",
        address: "tb1qh5nv88kddquhupa6spfm864mdhxt8rrs99dpu6",
    },
    EvmKat {
        tweak: "8b6e3a1fa936b9190d2094cddc0caf26dc577be0f4f75484d4d5a6235bfe8fdb",
        pubkey: "039bad36b6f29fbfb6a46dc3fa1695e53a6ef9960f7802e8084a528564cca709c8",
        address: "tb1qeujwdg26zms3lapgg5m4g8s9sgvflgaj43gjzm",
    },
    EvmKat {
        tweak: "e3903dc3ff7344ccd5a06078a71a1f6b365651d131c554c95fedf10dccb0e93f",
        pubkey: "0336d3853f7b513f5e783f00387ff94c64082bcca1fc25b68d0b963c17a5f56362",
        address: "tb1q580pyet4ek0yd2y096plyxyzresv9utywcvkdp",
    },
    EvmKat {
        tweak: "065cb13c23b6f8469c235ea60541561fb44bf13b75c46eff62ab4f2729fb9956",
        pubkey: "02e7fa2290bb5b0d642bafed713d124f680a2a9182633a7a61ffb440eb0ce15e34",
        address: "tb1qy8tz84x4n2qqrm04m3psmcwat9kwdv4sd53kyv",
    },
    EvmKat {
        tweak: "e8c9e0c8c9a16da2acda3364a81c845ae9f9f87083d0b0218cb250a724930854",
        pubkey: "027e20d881f94b9ba64064ed81a491ab33614d4e0356c9f6fef33f45f7482d743f",
        address: "tb1qvynkdf92t59lmngq6kkwpt9dsgnnh49tzep6rz",
    },
    EvmKat {
        tweak: "305a5fb5a7324fea78a595fbd041695feb9676f3aa9f6ffdcb268ef0f5f71959",
        pubkey: "035603de18a9c9c62cce92b31f24412c008415b75569ed0ad68dfce55247d7b092",
        address: "tb1qp24g3xvqv9sdt5nznuqk4u8hqttrrankvgascu",
    },
    EvmKat {
        tweak: "7edf70126127993f3912e609dd5b3e81e113c8aa62bc4dc8d7db125e494ab6bf",
        pubkey: "03ae588f09bb6568e2c002a5d49851a7d20335d25a2cdbc58aad12ea88c7769b33",
        address: "tb1qf20tftwlcyygvrk3gw25kst2z45ftr5xa6gqqg",
    },
    EvmKat {
        tweak: "a8073004759b5e027e52ad17290168c26660918931ad8acdd5aaafc032d97fd3",
        pubkey: "028fcd2d00f62dda38404212daf120fe835719e540a560779eac1e8120fdfbdcc8",
        address: "tb1q5a0zgg78s56c79s9yer4vazx63e7zxdwrhzwyt",
    },
    EvmKat {
        tweak: "4ed8439c6fe8d2cd89ffb83a027710a9dd963a934f6dd24aa56f32a1a9da958a",
        pubkey: "025d4e841f368130c78c2b370b1af0e5762dea1c53e21e586ff3f473805f7276db",
        address: "tb1qk80wz7tdvhhyd4xs2lu07ysrzpmpyszn2uq4w4",
    },
    EvmKat {
        tweak: "6c7b9b57948419cd433229c63fa3163b4125e5825318a79f1a483aeef3d86f3d",
        pubkey: "03b4b808d1ccc58de31c8557f3fc0787b94d7bf374b55c8f1b01b831f33f797810",
        address: "tb1qjcx79ntqtmjfprfnl2gprg838wvs596qk97vuy",
    },
    EvmKat {
        tweak: "db7344b2ffe7015430e480ca4745ab98a62bfd8070491f044269c813fc6fee37",
        pubkey: "0387de240a0c712bb2e8d0e877b860ce057d76eb34bd4384e502891de97beec44a",
        address: "tb1q6pv5dpt6dx6srx7txmlwcwh92t35ltj40d66c0",
    },
    EvmKat {
        tweak: "e46b947c9e14dc243e667ef5ba330e40cdd54c7ded382c165136cf64bcaa0d4e",
        pubkey: "026a4e0421e767d425cf0ce4ed3b61dca32299bdff6aca040f18a66120f542aaaf",
        address: "tb1qa62qqwjw26z6cczfd0fl8pqmpspfczn45nvj75",
    },
    EvmKat {
        tweak: "aad0237ca3f4b1ec94250c36e76389b607d8ecb881b673d9f9333161ce3183db",
        pubkey: "034b40bb45e69f60a7b8bfacf146cbda4c7486291c879a98dbcf9af865e52b0181",
        address: "tb1qmefthv9e5w55awmxmjuvjquslehatt50y03vjj",
    },
    EvmKat {
        tweak: "0a9cfbea89076b9153da68662a62a0bdfe7ad411dbfdbcf55ec9f6f6d1fd0134",
        pubkey: "03c788e8e516b6048387fb3315994ccc763e3215cd053dc59f2e0cb9f64ce14ff9",
        address: "tb1qzteu7h8gen7t0pse05pu7kumyw3mmfl9a876ay",
    },
    EvmKat {
        tweak: "e687da4d3891ed9852b4bf9e567c107cfd7d197c11bc1a44606ae220af4b0b20",
        pubkey: "037357ab03a0d7dbda364c397ec36d38c5c3a0f7bef21bdcfb80890c92f0779db7",
        address: "tb1qj2zenn43kxn7zpvufc4hteccyzr46dq6nyhuhh",
    },
    EvmKat {
        tweak: "3eadcd7b105537962d082dabb247d73c7f18b49221a71aa0eb3a8107dc1cab78",
        pubkey: "02f8f6fa742fe0f0b3801b2ced9fd9a79137d0554514c71b056b8d83c999dddfb5",
        address: "tb1qjs32z30t9zdkud9h6ne5uxh804ekrk47knylc7",
    },
    EvmKat {
        tweak: "8ca348e0af9a71bc682f3f2355302d70033a778f58855dff5cb5190703a62e99",
        pubkey: "0262d98ffbfedda13d7ffefa946ded1f4ed544b683836a1901540f0b45f979bfa5",
        address: "tb1q30fjhj3dzp3u5vvccavufvt76hmyxjce7y9cj2",
    },
    EvmKat {
        tweak: "85eb79313a9fbe2e067e710661238c273673dd91f62be333e4786a5689b4a271",
        pubkey: "03c24c10356ee2d395d9807276005d829109f3478bc8a6511579259b02fe9f0c36",
        address: "tb1qq9kalx5m45ry0z05l4wa7f34s5x82w2hpy6x3n",
    },
    EvmKat {
        tweak: "becd43442fbd7ff734da4ee2b418c31f17c9c79f5398d11f9dc3369b7fab45b8",
        pubkey: "039c1c63eedac75cd9b86df25fc0d94cbf29acb2cb72f366b81c4f14555c7c8a5f",
        address: "tb1qppkcmqmv2dsx4kaa0lzsta2la6y7qlayk0vpgm",
    },
    EvmKat {
        tweak: "9a5d9fc22cbea30e29f996a2bafdd74b1c637e6a607a9442b0fac1aad2143ad6",
        pubkey: "026ff6569d1ea1cc239c4f84b9e5f6279cdbf6cbd1471b388df2e9e766bd53aa01",
        address: "tb1qvj0fxqmh0t2zskednxwhlet357nnu9lmtcn8n8",
    },
    EvmKat {
        tweak: "b4635a14aa40694637dafcdae020432ff268868254d135dac2db78793eb0a083",
        pubkey: "03415f3c3710189fd8a92f8a10570452089959e208589c575653f7d8f3af70d457",
        address: "tb1q708zsjthamr9grzpg59h4pf64k63awzqhttpfn",
    },
    EvmKat {
        tweak: "cee36d950e4a2b724c39b4fe67dc04be61647af6aa6f2bf8a9569c61b40d8803",
        pubkey: "0356c00235375a5c8cd902c4628ee0c2df1ed8bd2cff43dafda7d41c5e5a32c440",
        address: "tb1q0jnvv0efpmphzavj2w9zc4hd3qwlqfe573jn6a",
    },
    EvmKat {
        tweak: "4c4136356ccf5182d85c53a3f519a15c04b7a00f5607d5fd5fc0a298dd6771eb",
        pubkey: "02b47e4e900a20d2d2f65e3b86d7616ea09d70bf60378cc0b27b4769ec4ae0db55",
        address: "tb1qyfk87n9nt7ala7tnjxmmdrgy7rqakzvuw4aa5e",
    },
    EvmKat {
        tweak: "a8671387b61ed8ca10a4b6f6e0cf573c5f1820768378cb6e517af3ac001897d3",
        pubkey: "026db79a85735651d9bbf530d6852fac3b8814315df697426696aa9dca8b7a98ab",
        address: "tb1q2zljyqu5d6lzuhrup3kz52lxk2x698wlat3g4v",
    },
    EvmKat {
        tweak: "d1764a9353759fcfbd1284ceb5120967f5c3aa78d34301a926603d9a3f6ccb24",
        pubkey: "03d4ab8a7f436e2b80659208c42f652b19ccb76bf02cc00c925774c6888a7fd254",
        address: "tb1q5e0h08lsvqwmh925vevgch0lavkxczx245xxkf",
    },
    EvmKat {
        tweak: "e2dd77486fa8087c3f536703da3f9522b8e2db328c8fae695ca7444430bf653f",
        pubkey: "03ecd54bf7581564dbed1378912f387505af2b3309bd49c70effe976503461d8d2",
        address: "tb1qvu7scxe5z9qcg482nzxmu6jngpvf9kkj43el3p",
    },
    EvmKat {
        tweak: "733aac68c054d2c21abdca898c30baa149cbb9249a29aa954169f2839b20a6ad",
        pubkey: "03c622c7011e5658bbe63788ea15f5a6c3362e9e39b907b1fb45d3381d0ed2ba5f",
        address: "tb1qpc8tqf45ah9yj7lk07zc00vq8slyt555dacwef",
    },
    EvmKat {
        tweak: "012dbe4fee8b56e88763210edfec846b698ca5e5ddecf88fee37fb130238663d",
        pubkey: "0300bbc97d0aa5fe7cf3afddd965b92364c56105bdd16b60934fbf5313bcad668b",
        address: "tb1q60082d7q8dvvt9dfk04wx93uk29q3kld5f9er8",
    },
];

/// Returns the master key of the EVM deposit vectors, `sha256(seed)`.
pub(crate) fn evm_kat_master_key() -> DepositPublicKey {
    let sk = SecretKey::from_slice(&sha256(EVM_DEPOSIT_SEED)).expect("valid secret key");
    DepositPublicKey::from(sk.public_key(SECP256K1))
}

/// Regenerates the inputs of every EVM deposit vector alongside its expected outputs.
///
/// Each vector advances the hash chain four times:
///
/// - `v1[..20]` is the bridge contract,
/// - `v2[..20]` is the wallet,
/// - `v3[..8]` is a `u64` chain id,
/// - `v4` is the aux data and seeds the next vector.
pub(crate) fn evm_kat_inputs() -> impl Iterator<Item = (EvmKatInputs, &'static EvmKat)> {
    let mut hash = sha256(EVM_DEPOSIT_SEED);

    let mut vectors = Vec::with_capacity(EVM_KATS.len());
    for kat in &EVM_KATS {
        let v1 = sha256(&hash);
        let v2 = sha256(&v1);
        let v3 = sha256(&v2);
        let v4 = sha256(&v3);
        hash = v4;

        let chain_id = u64::from_be_bytes(v3[..8].try_into().expect("8 bytes"));

        let inputs = EvmKatInputs {
            bridge: EvmAddress::try_from(&v1[..20]).expect("20 bytes"),
            wallet: EvmAddress::try_from(&v2[..20]).expect("20 bytes"),
            chain_id: ChainId::from(chain_id),
            aux_data: AuxData::new(v4),
        };
        vectors.push((inputs, kat));
    }

    vectors.into_iter()
}
