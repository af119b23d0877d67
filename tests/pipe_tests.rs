use rs2_seq::pipe::{self, Pipe, PipeExt};
use rs2_seq::{from, to, Seq};

#[tokio::test]
async fn test_pipe_map() {
    let double = pipe::map(|x: i32| x * 2);
    let result: Vec<i32> = to::collect(double.apply(from::iter(vec![1, 2, 3]))).await;
    assert_eq!(result, vec![2, 4, 6]);
}

#[tokio::test]
async fn test_pipe_filter() {
    let evens = pipe::filter(|x: &i32| x % 2 == 0);
    let result: Vec<i32> = to::collect(evens.apply(from::iter(1..=6))).await;
    assert_eq!(result, vec![2, 4, 6]);
}

#[tokio::test]
async fn test_pipe_compose() {
    let double = pipe::map(|x: i32| x * 2);
    let small = pipe::filter(|x: &i32| *x < 7);
    let pipe = pipe::compose(double, small);

    let result: Vec<i32> = to::collect(pipe.apply(from::iter(1..=5))).await;
    assert_eq!(result, vec![2, 4, 6]);
}

#[tokio::test]
async fn test_pipe_identity() {
    let pipe = pipe::identity();
    let result: Vec<i32> = to::collect(pipe.apply(from::iter(vec![1, 2, 3]))).await;
    assert_eq!(result, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_pipe_ext_compose() {
    let pipe = pipe::skip_n(1)
        .compose(pipe::take_n(3))
        .compose(pipe::map(|x: i32| x.to_string()));

    let result: Vec<String> = to::collect(pipe.apply(from::iter(0..100))).await;
    assert_eq!(result, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_pipe_is_reusable() {
    let window: Pipe<i32, i32> = pipe::skip_n(2).compose(pipe::take_n(2));
    let sources: Vec<Seq<i32>> = vec![from::iter(0..10), from::iter(vec![7, 8, 9])];

    let mut results = Vec::new();
    for src in sources {
        let got: Vec<i32> = to::collect(window.apply(src)).await;
        results.push(got);
    }
    assert_eq!(results, vec![vec![2, 3], vec![9]]);

    let copy = window.clone();
    let got: Vec<i32> = to::collect(copy.apply(from::iter(0..4))).await;
    assert_eq!(got, vec![2, 3]);
}

#[tokio::test]
async fn test_custom_pipe() {
    let pairs = Pipe::new(|src: Seq<i32>| src.pair_wise().map21(|a, b| b - a));
    let result: Vec<i32> = to::collect(pairs.apply(from::iter(vec![1, 4, 9, 16]))).await;
    assert_eq!(result, vec![3, 5, 7]);
}
