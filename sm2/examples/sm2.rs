use sm2::{PrivateKey, PublicKey, Sm2};

fn main() {
    let mut rng = rand::rng();
    let sm2 = Sm2::new();
    let (sk, pk) = sm2.generate_keypair(&mut rng).expect("keygen");

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let pk_bytes = bincode::serialize(&pk).expect("serialize pk");

    let message = "Hello, SM2";
    let ciphertext = sm2.encrypt(&mut rng, message, &pk).expect("encrypt");
    println!("public key: {}", hex::encode(pk.to_sec1_bytes()));
    println!("ciphertext: {ciphertext}");

    let sk2: PrivateKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let pk2: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    assert_eq!(sk2.public_key(), &pk2);

    let decrypted = sm2.decrypt(&ciphertext, &sk2).expect("decrypt");
    println!("decrypted:  {decrypted}");
    assert_eq!(decrypted, message);

    let (other_sk, _) = sm2.generate_keypair(&mut rng).expect("keygen");
    match sm2.decrypt(&ciphertext, &other_sk) {
        Ok(_) => panic!("decryption with an unrelated key succeeded"),
        Err(err) => println!("unrelated key: {err}"),
    }
}
